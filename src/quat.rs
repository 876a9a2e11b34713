use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{Scalar, Vector3};

/// A quaternion `a + bi + cj + dk`.
///
/// Components are plain public fields and can be updated in place. Integer
/// and rational components stay exact through `+`, `-`, `*` and scalar `/`;
/// operations that need a square root or trigonometry return
/// `Quaternion<f64>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T> Quaternion<T> {
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    pub fn from_real_imaginary(re: T, im: Vector3<T>) -> Self {
        let [b, c, d] = im;
        Self { a: re, b, c, d }
    }

    /// Applies `f` to every component.
    pub fn map<U, F>(self, mut f: F) -> Quaternion<U>
    where
        F: FnMut(T) -> U,
    {
        Quaternion {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
            d: f(self.d),
        }
    }
}

impl<T: Scalar> Quaternion<T> {
    /// A quaternion with zero real part.
    pub fn pure(im: Vector3<T>) -> Self {
        Self::from_real_imaginary(T::zero(), im)
    }

    pub fn real(&self) -> T {
        self.a.clone()
    }

    #[inline]
    pub fn re(&self) -> T {
        self.real()
    }

    pub fn imaginary(&self) -> Vector3<T> {
        [self.b.clone(), self.c.clone(), self.d.clone()]
    }

    #[inline]
    pub fn im(&self) -> Vector3<T> {
        self.imaginary()
    }

    pub fn to_float(&self) -> Quaternion<f64> {
        Quaternion::new(
            self.a.to_float(),
            self.b.to_float(),
            self.c.to_float(),
            self.d.to_float(),
        )
    }

    /// `a² + b² + c² + d²`, exact for integer and rational components.
    pub fn norm_squared(&self) -> T {
        self.a.clone() * self.a.clone()
            + self.b.clone() * self.b.clone()
            + self.c.clone() * self.c.clone()
            + self.d.clone() * self.d.clone()
    }

    pub fn length(&self) -> f64 {
        let Quaternion { a, b, c, d } = self.to_float();
        (a * a + b * b + c * c + d * d).sqrt()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.length()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(
            self.a.clone(),
            -self.b.clone(),
            -self.c.clone(),
            -self.d.clone(),
        )
    }

    /// `q̄ / |q|²`.
    ///
    /// The zero quaternion has no inverse; its components come out as NaN.
    pub fn inverse(&self) -> Quaternion<f64> {
        let length = self.length();
        self.conjugate().to_float() / (length * length)
    }

    /// Scales to unit length.
    pub fn unify(&self) -> Quaternion<f64> {
        self.to_float() / self.length()
    }

    /// Rounds every component to `ndigits` decimal digits.
    pub fn round(&self, ndigits: i32) -> Self {
        Self::new(
            self.a.round_digits(ndigits),
            self.b.round_digits(ndigits),
            self.c.round_digits(ndigits),
            self.d.round_digits(ndigits),
        )
    }

    pub fn to_s(&self) -> String {
        self.to_string()
    }

    /// Rotates `point` by `angle_degrees` around `axis` (right-hand rule)
    /// as `r * p * r⁻¹`.
    ///
    /// `axis` must already have unit length; it is not normalized here.
    pub fn rotate(point: Vector3<T>, axis: Vector3<T>, angle_degrees: f64) -> Vector3<f64> {
        let phi_half = (angle_degrees * PI / 180.0) / 2.0;
        let (sin, cos) = phi_half.sin_cos();

        let p = Quaternion::pure(point.map(|x| x.to_float()));
        let r = Quaternion::from_real_imaginary(cos, axis.map(|x| sin * x.to_float()));

        let rotated = r * p * r.inverse();
        log::trace!(
            "rotated {p} by {angle_degrees} degrees around {r} into {rotated}"
        );
        rotated.imaginary()
    }
}
