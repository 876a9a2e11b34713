use std::fmt;

use hamilton_base::ScalarDisplay;

use crate::Quaternion;

pub(crate) const UNITS: [char; 3] = ['i', 'j', 'k'];

impl<T: ScalarDisplay> fmt::Display for Quaternion<T> {
    /// `a±bi±cj±dk`; every imaginary component carries an explicit sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a.scalar_string())?;
        for (component, unit) in [&self.b, &self.c, &self.d].into_iter().zip(UNITS) {
            let s = component.scalar_string();
            if s.starts_with('-') {
                write!(f, "{s}{unit}")?;
            } else {
                write!(f, "+{s}{unit}")?;
            }
        }
        Ok(())
    }
}
