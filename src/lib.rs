//! Quaternions over integer, floating point and rational components, with
//! the Hamilton product and axis-angle rotation of 3D points.
//!
//! ```
//! use hamilton::Quaternion;
//!
//! let p = Quaternion::new(4, 3, 1, -9);
//! let q = Quaternion::new(6, 7, -3, 1);
//! assert_eq!(p * q, Quaternion::new(15, 20, -72, -66));
//! assert_eq!(q * p, Quaternion::new(15, 72, 60, -34));
//! assert_eq!((p * -7).to_string(), "-28-21i-7j+63k");
//! ```

mod display;
mod error;
mod factory;
mod interop;
mod ops;
mod parse;
mod quat;

pub use error::{ParseQuaternionError, QuaternionError, Result};
pub use factory::Arg;
pub use hamilton_base::{RoundDigits, Scalar, ScalarDisplay, Ten, ToFloat};
pub use ops::Operand;
pub use quat::Quaternion;

/// A 3D vector as a plain array, the convention of `vecmath` and the
/// `quaternion` crate.
pub type Vector3<T> = [T; 3];

/// Rotates `point` by `angle_degrees` around the unit vector `axis`.
///
/// Shorthand for [`Quaternion::rotate`].
pub fn rotate<T: Scalar>(point: Vector3<T>, axis: Vector3<T>, angle_degrees: f64) -> Vector3<f64> {
    Quaternion::rotate(point, axis, angle_degrees)
}
