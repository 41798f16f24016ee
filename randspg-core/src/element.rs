/*
 * Element data for the crystal model.
 *
 * The table carries symbols and covalent radii for Z = 1..=96, which is as far
 * as the structure-candidate workflows here ever reach. Radii are only used as
 * interatomic-distance floors, so single-bond covalent values are enough.
 */

use thiserror::Error;

pub use randspg_macros::atomic_number;

use crate::structure::Angstrom;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("unknown element symbol '{0}'")]
    UnknownSymbol(String),

    #[error("atomic number {0} out of range (known elements: 1..=96)")]
    UnknownAtomicNumber(u8),
}

struct ElementData {
    symbol: &'static str,
    covalent_radius: f64,
}

// Indexed by atomic number - 1.
#[rustfmt::skip]
static ELEMENTS: [ElementData; 96] = [
    ElementData { symbol: "H",  covalent_radius: 0.31 },
    ElementData { symbol: "He", covalent_radius: 0.28 },
    ElementData { symbol: "Li", covalent_radius: 1.28 },
    ElementData { symbol: "Be", covalent_radius: 0.96 },
    ElementData { symbol: "B",  covalent_radius: 0.84 },
    ElementData { symbol: "C",  covalent_radius: 0.76 },
    ElementData { symbol: "N",  covalent_radius: 0.71 },
    ElementData { symbol: "O",  covalent_radius: 0.66 },
    ElementData { symbol: "F",  covalent_radius: 0.57 },
    ElementData { symbol: "Ne", covalent_radius: 0.58 },
    ElementData { symbol: "Na", covalent_radius: 1.66 },
    ElementData { symbol: "Mg", covalent_radius: 1.41 },
    ElementData { symbol: "Al", covalent_radius: 1.21 },
    ElementData { symbol: "Si", covalent_radius: 1.11 },
    ElementData { symbol: "P",  covalent_radius: 1.07 },
    ElementData { symbol: "S",  covalent_radius: 1.05 },
    ElementData { symbol: "Cl", covalent_radius: 1.02 },
    ElementData { symbol: "Ar", covalent_radius: 1.06 },
    ElementData { symbol: "K",  covalent_radius: 2.03 },
    ElementData { symbol: "Ca", covalent_radius: 1.76 },
    ElementData { symbol: "Sc", covalent_radius: 1.70 },
    ElementData { symbol: "Ti", covalent_radius: 1.60 },
    ElementData { symbol: "V",  covalent_radius: 1.53 },
    ElementData { symbol: "Cr", covalent_radius: 1.39 },
    ElementData { symbol: "Mn", covalent_radius: 1.39 },
    ElementData { symbol: "Fe", covalent_radius: 1.32 },
    ElementData { symbol: "Co", covalent_radius: 1.26 },
    ElementData { symbol: "Ni", covalent_radius: 1.24 },
    ElementData { symbol: "Cu", covalent_radius: 1.32 },
    ElementData { symbol: "Zn", covalent_radius: 1.22 },
    ElementData { symbol: "Ga", covalent_radius: 1.22 },
    ElementData { symbol: "Ge", covalent_radius: 1.20 },
    ElementData { symbol: "As", covalent_radius: 1.19 },
    ElementData { symbol: "Se", covalent_radius: 1.20 },
    ElementData { symbol: "Br", covalent_radius: 1.20 },
    ElementData { symbol: "Kr", covalent_radius: 1.16 },
    ElementData { symbol: "Rb", covalent_radius: 2.20 },
    ElementData { symbol: "Sr", covalent_radius: 1.95 },
    ElementData { symbol: "Y",  covalent_radius: 1.90 },
    ElementData { symbol: "Zr", covalent_radius: 1.75 },
    ElementData { symbol: "Nb", covalent_radius: 1.64 },
    ElementData { symbol: "Mo", covalent_radius: 1.54 },
    ElementData { symbol: "Tc", covalent_radius: 1.47 },
    ElementData { symbol: "Ru", covalent_radius: 1.46 },
    ElementData { symbol: "Rh", covalent_radius: 1.42 },
    ElementData { symbol: "Pd", covalent_radius: 1.39 },
    ElementData { symbol: "Ag", covalent_radius: 1.45 },
    ElementData { symbol: "Cd", covalent_radius: 1.44 },
    ElementData { symbol: "In", covalent_radius: 1.42 },
    ElementData { symbol: "Sn", covalent_radius: 1.39 },
    ElementData { symbol: "Sb", covalent_radius: 1.39 },
    ElementData { symbol: "Te", covalent_radius: 1.38 },
    ElementData { symbol: "I",  covalent_radius: 1.39 },
    ElementData { symbol: "Xe", covalent_radius: 1.40 },
    ElementData { symbol: "Cs", covalent_radius: 2.44 },
    ElementData { symbol: "Ba", covalent_radius: 2.15 },
    ElementData { symbol: "La", covalent_radius: 2.07 },
    ElementData { symbol: "Ce", covalent_radius: 2.04 },
    ElementData { symbol: "Pr", covalent_radius: 2.03 },
    ElementData { symbol: "Nd", covalent_radius: 2.01 },
    ElementData { symbol: "Pm", covalent_radius: 1.99 },
    ElementData { symbol: "Sm", covalent_radius: 1.98 },
    ElementData { symbol: "Eu", covalent_radius: 1.98 },
    ElementData { symbol: "Gd", covalent_radius: 1.96 },
    ElementData { symbol: "Tb", covalent_radius: 1.94 },
    ElementData { symbol: "Dy", covalent_radius: 1.92 },
    ElementData { symbol: "Ho", covalent_radius: 1.92 },
    ElementData { symbol: "Er", covalent_radius: 1.89 },
    ElementData { symbol: "Tm", covalent_radius: 1.90 },
    ElementData { symbol: "Yb", covalent_radius: 1.87 },
    ElementData { symbol: "Lu", covalent_radius: 1.87 },
    ElementData { symbol: "Hf", covalent_radius: 1.75 },
    ElementData { symbol: "Ta", covalent_radius: 1.70 },
    ElementData { symbol: "W",  covalent_radius: 1.62 },
    ElementData { symbol: "Re", covalent_radius: 1.51 },
    ElementData { symbol: "Os", covalent_radius: 1.44 },
    ElementData { symbol: "Ir", covalent_radius: 1.41 },
    ElementData { symbol: "Pt", covalent_radius: 1.36 },
    ElementData { symbol: "Au", covalent_radius: 1.36 },
    ElementData { symbol: "Hg", covalent_radius: 1.32 },
    ElementData { symbol: "Tl", covalent_radius: 1.45 },
    ElementData { symbol: "Pb", covalent_radius: 1.46 },
    ElementData { symbol: "Bi", covalent_radius: 1.48 },
    ElementData { symbol: "Po", covalent_radius: 1.40 },
    ElementData { symbol: "At", covalent_radius: 1.50 },
    ElementData { symbol: "Rn", covalent_radius: 1.50 },
    ElementData { symbol: "Fr", covalent_radius: 2.60 },
    ElementData { symbol: "Ra", covalent_radius: 2.21 },
    ElementData { symbol: "Ac", covalent_radius: 2.15 },
    ElementData { symbol: "Th", covalent_radius: 2.06 },
    ElementData { symbol: "Pa", covalent_radius: 2.00 },
    ElementData { symbol: "U",  covalent_radius: 1.96 },
    ElementData { symbol: "Np", covalent_radius: 1.90 },
    ElementData { symbol: "Pu", covalent_radius: 1.87 },
    ElementData { symbol: "Am", covalent_radius: 1.80 },
    ElementData { symbol: "Cm", covalent_radius: 1.69 },
];

fn data(atomic_number: u8) -> Result<&'static ElementData, ElementError> {
    if atomic_number == 0 || atomic_number as usize > ELEMENTS.len() {
        return Err(ElementError::UnknownAtomicNumber(atomic_number));
    }
    Ok(&ELEMENTS[atomic_number as usize - 1])
}

/// # Errors
/// `UnknownAtomicNumber` if outside 1..=96.
pub fn symbol_from_atomic_number(atomic_number: u8) -> Result<&'static str, ElementError> {
    data(atomic_number).map(|e| e.symbol)
}

/// # Errors
/// `UnknownSymbol` if the symbol is not in the table. Lookup is case sensitive
/// ("Na", not "NA").
pub fn atomic_number_from_symbol(symbol: &str) -> Result<u8, ElementError> {
    ELEMENTS
        .iter()
        .position(|e| e.symbol == symbol)
        .map(|idx| {
            #[allow(clippy::cast_possible_truncation)]
            let z = (idx + 1) as u8;
            z
        })
        .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))
}

/// Unscaled single-bond covalent radius. `None` outside 1..=96.
#[must_use]
pub fn covalent_radius(atomic_number: u8) -> Option<Angstrom> {
    data(atomic_number).ok().map(|e| Angstrom(e.covalent_radius))
}

/// A set of per-element radii for interatomic-distance checks.
///
/// Starts from the covalent radii, scaled by a global factor, clamped from
/// below, with optional per-element overrides. Overrides win over scaling and
/// the floor.
///
/// # Examples
///
/// ```
/// use randspg_core::{atomic_number, Radii};
///
/// let radii = Radii::new(0.5)
///     .with_min_radius(0.4)
///     .with_override(atomic_number!(H), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct Radii {
    scaling_factor: f64,
    min_radius: f64,
    overrides: Vec<(u8, f64)>,
}

impl Default for Radii {
    fn default() -> Self {
        Radii {
            scaling_factor: 1.0,
            min_radius: 0.0,
            overrides: Vec::new(),
        }
    }
}

impl Radii {
    #[must_use]
    pub fn new(scaling_factor: f64) -> Self {
        Radii {
            scaling_factor,
            ..Radii::default()
        }
    }

    /// Floor applied after scaling, in angstrom.
    #[must_use]
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    /// Fix the radius of one element, in angstrom. A later override of the
    /// same element replaces the earlier one.
    #[must_use]
    pub fn with_override(mut self, atomic_number: u8, radius: f64) -> Self {
        self.overrides.retain(|(z, _)| *z != atomic_number);
        self.overrides.push((atomic_number, radius));
        self
    }

    /// Effective radius for one element. `None` if the element is outside the
    /// table and has no override.
    #[must_use]
    pub fn for_atomic_number(&self, atomic_number: u8) -> Option<Angstrom> {
        if let Some((_, r)) = self
            .overrides
            .iter()
            .find(|(z, _)| *z == atomic_number)
        {
            return Some(Angstrom(*r));
        }

        covalent_radius(atomic_number)
            .map(|r| Angstrom(f64::max(f64::from(r) * self.scaling_factor, self.min_radius)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_lookup_round_trip() {
        assert_eq!(symbol_from_atomic_number(11).unwrap(), "Na");
        assert_eq!(atomic_number_from_symbol("Na").unwrap(), 11);
        assert_eq!(atomic_number_from_symbol("Cm").unwrap(), 96);
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(
            atomic_number_from_symbol("Nq"),
            Err(ElementError::UnknownSymbol("Nq".to_string()))
        );
        assert_eq!(
            symbol_from_atomic_number(0),
            Err(ElementError::UnknownAtomicNumber(0))
        );
        assert_eq!(
            symbol_from_atomic_number(97),
            Err(ElementError::UnknownAtomicNumber(97))
        );
    }

    #[test]
    fn macro_agrees_with_table() {
        assert_eq!(atomic_number!(Na), atomic_number_from_symbol("Na").unwrap());
        assert_eq!(atomic_number!(Cl), atomic_number_from_symbol("Cl").unwrap());
    }

    #[test]
    fn radii_scaling_and_floor() {
        // covalent radius of O is 0.66
        let radii = Radii::new(0.5);
        let r = radii.for_atomic_number(8).unwrap();
        assert!((f64::from(r) - 0.33).abs() < 1e-12);

        let radii = Radii::new(0.5).with_min_radius(0.4);
        let r = radii.for_atomic_number(8).unwrap();
        assert!((f64::from(r) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn radii_override_wins() {
        let radii = Radii::new(0.5).with_min_radius(0.4).with_override(8, 0.1);
        let r = radii.for_atomic_number(8).unwrap();
        assert!((f64::from(r) - 0.1).abs() < 1e-12);

        // replacing an earlier override of the same element
        let radii = radii.with_override(8, 0.2);
        let r = radii.for_atomic_number(8).unwrap();
        assert!((f64::from(r) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn radii_unknown_element() {
        let radii = Radii::default();
        assert!(radii.for_atomic_number(120).is_none());

        // an override still applies outside the table
        let radii = radii.with_override(120, 1.0);
        assert!(radii.for_atomic_number(120).is_some());
    }
}
