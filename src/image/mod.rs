pub mod domain;
pub mod field;
pub mod io;
pub mod sample;
pub mod traits;

pub use self::domain::{Domain, Region, RegionIndices};
pub use self::field::{Field, FieldRef, HessianField, ScalarField};
pub use self::sample::Sample;
pub use self::traits::FieldView;
