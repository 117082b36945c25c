//! The built-in pattern catalog.

pub mod checkerboard;
pub mod concentric_rings;
pub mod pentagon_triangle;
pub mod radial_spokes;
pub mod symbol_row;

pub use checkerboard::Checkerboard;
pub use concentric_rings::ConcentricRings;
pub use pentagon_triangle::PentagonTriangle;
pub use radial_spokes::RadialSpokes;
pub use symbol_row::SymbolRow;

use std::sync::Arc;

use crate::family::PatternFamily;

/// Every built-in family, in registry order.
pub fn builtin() -> Vec<Arc<dyn PatternFamily>> {
    vec![
        Arc::new(Checkerboard),
        Arc::new(ConcentricRings),
        Arc::new(PentagonTriangle),
        Arc::new(RadialSpokes),
        Arc::new(SymbolRow),
    ]
}
