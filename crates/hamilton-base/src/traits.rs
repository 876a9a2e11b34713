use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::bigint::ToBigInt;
use num::rational::Ratio;
use num::{CheckedMul, Integer, One, ToPrimitive, Zero};

pub trait Ten {
    const TEN: Self;
}

/// Lossy conversion to `f64`, used wherever an operation is intrinsically
/// floating point (square roots, trigonometry).
pub trait ToFloat {
    fn to_float(&self) -> f64;
}

/// Rounds to `ndigits` decimal digits, half-way cases away from zero.
/// A negative `ndigits` rounds to tens, hundreds and so on.
pub trait RoundDigits {
    fn round_digits(&self, ndigits: i32) -> Self;
}

/// Renders a value in the default notation of its kind: integers as digits,
/// floats always with a decimal point and rationals as `num/den`.
pub trait ScalarDisplay {
    fn scalar_string(&self) -> String;
}

/// A component type of a quaternion.
///
/// Arithmetic stays within the kind, so integer and rational components keep
/// exact results. Only [`ToFloat`] leaves it.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + ToFloat
    + RoundDigits
    + ScalarDisplay
{
}

impl<T> Scalar for T where
    T: Clone
        + Debug
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + ToFloat
        + RoundDigits
        + ScalarDisplay
{
}

// Implementations

macro_rules! impl_10_for_primitives {
    ($($t: ty),*$(,)?) => {
        $(impl Ten for $t {
            const TEN: Self = 10 as $t;
        })*
    };
}
impl_10_for_primitives!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl_signed_int_scalar!(i8, i16, i32, i64, i128, isize);
impl_float_scalar!(f32, f64);

impl<T> ToFloat for Ratio<T>
where
    T: Clone + Integer + ToPrimitive + ToBigInt,
{
    fn to_float(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}

impl<T> RoundDigits for Ratio<T>
where
    T: Clone + Integer + CheckedMul + Ten,
{
    fn round_digits(&self, ndigits: i32) -> Self {
        match num::checked_pow(T::TEN, ndigits.unsigned_abs() as usize) {
            Some(scale) => {
                let scale = Ratio::from_integer(scale);
                if ndigits >= 0 {
                    (self * &scale).round() / scale
                } else {
                    (self / &scale).round() * scale
                }
            }
            // the scale does not fit the integer type
            None if ndigits >= 0 => self.clone(),
            None => Ratio::zero(),
        }
    }
}

impl<T> ScalarDisplay for Ratio<T>
where
    T: Clone + Integer + std::fmt::Display,
{
    fn scalar_string(&self) -> String {
        self.to_string()
    }
}
