//! Conversions to and from the `(re, [i, j, k])` tuple used by the
//! `quaternion` crate.

use crate::{Quaternion, Vector3};

impl<T> From<quaternion::Quaternion<T>> for Quaternion<T> {
    fn from(value: quaternion::Quaternion<T>) -> Self {
        let (re, im) = value;
        Quaternion::from_real_imaginary(re, im)
    }
}

impl<T> From<Quaternion<T>> for (T, Vector3<T>) {
    fn from(value: Quaternion<T>) -> Self {
        let Quaternion { a, b, c, d } = value;
        (a, [b, c, d])
    }
}
