pub use randspg_core::*;

pub use randspg_babel as babel;
