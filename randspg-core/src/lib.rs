mod element;
pub use element::{
    atomic_number, atomic_number_from_symbol, covalent_radius, symbol_from_atomic_number,
    ElementError, Radii,
};

mod position;
pub use position::{interpret_component, PositionError, PositionTriplet};

mod structure;
pub use structure::{
    Angstrom, AtomStruct, Crystal, CrystalError, Degree, FracCoord, LatticeStruct, NumAndType,
    Volume,
};

pub mod math;
