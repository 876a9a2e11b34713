use num::rational::Ratio;
use num::{Integer, Zero};

use crate::{Quaternion, QuaternionError, Result, Scalar, Vector3, ops::Operand};

/// One argument of [`Quaternion::from_args`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<T> {
    Scalar(T),
    Quaternion(Quaternion<T>),
    Vector(Vector3<T>),
}

impl<T> Arg<T> {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Scalar(_) => "scalar",
            Arg::Quaternion(_) => "quaternion",
            Arg::Vector(_) => "vector",
        }
    }
}

impl<T> From<Quaternion<T>> for Arg<T> {
    fn from(value: Quaternion<T>) -> Self {
        Arg::Quaternion(value)
    }
}

impl<T> From<Vector3<T>> for Arg<T> {
    fn from(value: Vector3<T>) -> Self {
        Arg::Vector(value)
    }
}

impl<T> From<Quaternion<T>> for Operand<T> {
    fn from(value: Quaternion<T>) -> Self {
        Operand::Quaternion(value)
    }
}

macro_rules! impl_from_scalar {
    ($($t: ty),*$(,)?) => {
        $(
            impl From<$t> for Arg<$t> {
                fn from(value: $t) -> Self {
                    Arg::Scalar(value)
                }
            }

            impl From<$t> for Operand<$t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}
impl_from_scalar!(i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Clone + Integer> From<Ratio<T>> for Arg<Ratio<T>> {
    fn from(value: Ratio<T>) -> Self {
        Arg::Scalar(value)
    }
}

impl<T: Clone + Integer> From<Ratio<T>> for Operand<Ratio<T>> {
    fn from(value: Ratio<T>) -> Self {
        Operand::Scalar(value)
    }
}

impl<T: Scalar> Quaternion<T> {
    /// Builds a quaternion from a loosely shaped argument list.
    ///
    /// Accepts up to four scalars (missing trailing components are zero), a
    /// single quaternion, or a real part followed by the imaginary vector.
    pub fn from_args(args: Vec<Arg<T>>) -> Result<Self> {
        let zero = T::zero;
        match args.as_slice() {
            [] => Ok(Self::zero()),
            [Arg::Scalar(a)] => Ok(Self::new(a.clone(), zero(), zero(), zero())),
            [Arg::Scalar(a), Arg::Scalar(b)] => Ok(Self::new(a.clone(), b.clone(), zero(), zero())),
            [Arg::Scalar(a), Arg::Scalar(b), Arg::Scalar(c)] => {
                Ok(Self::new(a.clone(), b.clone(), c.clone(), zero()))
            }
            [Arg::Scalar(a), Arg::Scalar(b), Arg::Scalar(c), Arg::Scalar(d)] => {
                Ok(Self::new(a.clone(), b.clone(), c.clone(), d.clone()))
            }
            [Arg::Quaternion(q)] => Ok(q.clone()),
            [Arg::Scalar(re), Arg::Vector(im)] => {
                Ok(Self::from_real_imaginary(re.clone(), im.clone()))
            }
            other => {
                let shape = other.iter().map(Arg::kind).collect::<Vec<_>>().join(", ");
                log::debug!("rejected quaternion arguments ({shape})");
                Err(QuaternionError::InvalidArgument { shape })
            }
        }
    }
}

impl<T: Scalar> From<T> for Quaternion<T> {
    fn from(value: T) -> Self {
        Self::new(value, T::zero(), T::zero(), T::zero())
    }
}

/// Builds a quaternion through [`Quaternion::from_args`], converting each
/// argument with `Arg::from`.
///
/// ```
/// use hamilton::{Quaternion, quaternion};
///
/// let q: Quaternion<i64> = quaternion!(1, 2).unwrap();
/// assert_eq!(q, Quaternion::new(1, 2, 0, 0));
///
/// let v: Quaternion<i64> = quaternion!(0, [1, 2, 3]).unwrap();
/// assert_eq!(v, Quaternion::new(0, 1, 2, 3));
/// ```
#[macro_export]
macro_rules! quaternion {
    ($($arg: expr),* $(,)?) => {
        $crate::Quaternion::from_args(vec![$($crate::Arg::from($arg)),*])
    };
}
