use std::iter::{Product, Sum};
use std::ops::*;

use num::{One, Zero};

use crate::{Quaternion, Scalar};

/// Right-hand side of `*` and `/` when its kind is only known at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T> {
    Scalar(T),
    Quaternion(Quaternion<T>),
}

impl<T: Scalar> Quaternion<T> {
    /// Hamilton product for a quaternion operand, scaling for a scalar one.
    pub fn mul_operand(self, rhs: Operand<T>) -> Quaternion<T> {
        match rhs {
            Operand::Scalar(s) => self * s,
            Operand::Quaternion(q) => self * q,
        }
    }

    /// Division by either kind of operand.
    ///
    /// Quaternion division always goes through the floating point inverse,
    /// so both arms return `Quaternion<f64>`. A scalar divisor is applied in
    /// the component kind first.
    pub fn div_operand(self, rhs: Operand<T>) -> Quaternion<f64> {
        match rhs {
            Operand::Scalar(s) => (self / s).to_float(),
            Operand::Quaternion(q) => self / q,
        }
    }
}

macro_rules! impl_componentwise {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident) => {
        impl<T: Scalar> $Op for Quaternion<T> {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self::Output {
                Quaternion {
                    a: self.a.$op(rhs.a),
                    b: self.b.$op(rhs.b),
                    c: self.c.$op(rhs.c),
                    d: self.d.$op(rhs.d),
                }
            }
        }

        impl<T: Scalar> $OpAssign for Quaternion<T> {
            fn $op_assign(&mut self, rhs: Self) {
                *self = self.clone().$op(rhs);
            }
        }
    };
}
impl_componentwise!(Add, add, AddAssign, add_assign);
impl_componentwise!(Sub, sub, SubAssign, sub_assign);

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Quaternion {
            a: -self.a,
            b: -self.b,
            c: -self.c,
            d: -self.d,
        }
    }
}

impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    /// The Hamilton product; `p * q` and `q * p` differ in general.
    fn mul(self, rhs: Self) -> Self::Output {
        let Quaternion { a: a1, b: b1, c: c1, d: d1 } = self;
        let Quaternion { a: a2, b: b2, c: c2, d: d2 } = rhs;
        Quaternion {
            a: a1.clone() * a2.clone()
                - b1.clone() * b2.clone()
                - c1.clone() * c2.clone()
                - d1.clone() * d2.clone(),
            b: a1.clone() * b2.clone() + b1.clone() * a2.clone() + c1.clone() * d2.clone()
                - d1.clone() * c2.clone(),
            c: a1.clone() * c2.clone() - b1.clone() * d2.clone()
                + c1.clone() * a2.clone()
                + d1.clone() * b2.clone(),
            d: a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        }
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Quaternion {
            a: self.a * rhs.clone(),
            b: self.b * rhs.clone(),
            c: self.c * rhs.clone(),
            d: self.d * rhs,
        }
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.clone() * rhs;
    }
}

impl<T: Scalar> Div for Quaternion<T> {
    type Output = Quaternion<f64>;

    /// `self * rhs⁻¹`.
    fn div(self, rhs: Self) -> Self::Output {
        self.to_float() * rhs.inverse()
    }
}

impl<T: Scalar> Div<T> for Quaternion<T> {
    type Output = Self;

    /// Multiplies by `1 / rhs`, taking the reciprocal in the component kind:
    /// exact for rationals and floats, truncated for integers.
    fn div(self, rhs: T) -> Self::Output {
        self * (T::one() / rhs)
    }
}

impl<T: Scalar> Zero for Quaternion<T> {
    fn zero() -> Self {
        Quaternion::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero() && self.c.is_zero() && self.d.is_zero()
    }
}

impl<T: Scalar> One for Quaternion<T> {
    fn one() -> Self {
        Quaternion::new(T::one(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: Scalar> Sum for Quaternion<T> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

/// Multiplies left to right, keeping the order of the factors.
impl<T: Scalar> Product for Quaternion<T> {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::one(), |acc, q| acc * q)
    }
}
