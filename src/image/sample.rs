//! Numeric sample types stored in input and output fields.
//!
//! The objectness arithmetic always runs in `f64`; fields may store `f32` to
//! halve memory. Conversion happens once on read and once on write.
use nalgebra::Scalar;

pub trait Sample: Scalar + Copy + Send + Sync + Default {
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}
