use std::str::FromStr;

use anyhow::Context;
use hamilton_base::parsing::{parse_scalar, split_signed_terms};

use crate::{ParseQuaternionError, Quaternion, display::UNITS};

fn strip_unit(term: &str, unit: char) -> Result<&str, ParseQuaternionError> {
    term.strip_suffix(unit)
        .ok_or_else(|| ParseQuaternionError::MissingUnit {
            term: term.to_string(),
            unit,
        })
}

/// Parses the `a±bi±cj±dk` notation produced by `Display`.
impl<T> FromStr for Quaternion<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Err = anyhow::Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ParseQuaternionError::InvalidFormat.into());
        }
        let terms = split_signed_terms(src);
        let [re, i, j, k] = terms.as_slice() else {
            return Err(ParseQuaternionError::TermCount(terms.len()).into());
        };
        if re.ends_with(UNITS) {
            return Err(ParseQuaternionError::InvalidFormat.into());
        }
        let a = parse_scalar(re).context("Invalid real part")?;
        let b = parse_scalar(strip_unit(i, 'i')?).context("Invalid i component")?;
        let c = parse_scalar(strip_unit(j, 'j')?).context("Invalid j component")?;
        let d = parse_scalar(strip_unit(k, 'k')?).context("Invalid k component")?;
        Ok(Quaternion::new(a, b, c, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::rational::Rational64;

    #[test]
    fn parses_display_output() {
        let q: Quaternion<i64> = "0+1i-2j-3k".parse().unwrap();
        assert_eq!(q, Quaternion::new(0, 1, -2, -3));

        let q: Quaternion<f64> = " -0.0+1.0i+2.5e-3j-3.0k ".parse().unwrap();
        assert_eq!(q, Quaternion::new(-0.0, 1.0, 0.0025, -3.0));
        assert!(q.a.is_sign_negative());
    }

    #[test]
    fn display_round_trip() {
        let q = Quaternion::new(
            Rational64::new(-1, 7),
            Rational64::new(2, 7),
            Rational64::new(3, 7),
            Rational64::new(4, 7),
        );
        assert_eq!(q.to_string().parse::<Quaternion<Rational64>>().unwrap(), q);

        for q in [
            Quaternion::new(1e20, 0.0, 0.0, 0.0),
            Quaternion::new(0.0, 1e-5, -1e300, 4e-7),
        ] {
            assert_eq!(q.to_string().parse::<Quaternion<f64>>().unwrap(), q);
        }
    }

    #[test]
    fn structural_errors() {
        let err = "1+2i+3j".parse::<Quaternion<i64>>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseQuaternionError>(),
            Some(&ParseQuaternionError::TermCount(3))
        );

        let err = "1+2i+3k+4j".parse::<Quaternion<i64>>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseQuaternionError>(),
            Some(&ParseQuaternionError::MissingUnit {
                term: "+3k".to_string(),
                unit: 'j'
            })
        );

        let err = "".parse::<Quaternion<i64>>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseQuaternionError>(),
            Some(&ParseQuaternionError::InvalidFormat)
        );
    }

    #[test]
    fn component_errors_name_the_component() {
        let err = "1+2.5i+3j+4k".parse::<Quaternion<i64>>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid i component");
        assert!(format!("{err:#}").contains("`+2.5`"));
    }
}
