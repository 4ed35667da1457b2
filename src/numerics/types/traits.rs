// src/numerics/types/traits.rs
// Element trait shared by the matrix types.

use core::fmt::{Debug, Display};

/// FloatingPoint is the element type a [`Matrix`](super::matrix::Matrix)
/// can hold.
///
/// Note: We require Copy, PartialOrd, Display and the basic arithmetic ops on Self.
pub trait FloatingPoint:
Copy + PartialOrd + Debug + Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn abs(self) -> Self;
    fn to_f64(self) -> f64;

    /// Bit pattern used for hashing. `-0.0` maps to the same bits as `0.0`.
    fn hash_bits(self) -> u64;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f32::abs(self) }
    fn to_f64(self) -> f64 { self as f64 }

    fn hash_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() as u64 }
    }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f64::abs(self) }
    fn to_f64(self) -> f64 { self }

    fn hash_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() }
    }
}
