macro_rules! impl_signed_int_scalar {
    ($($t: ty),*$(,)?) => {
        $(
            impl ToFloat for $t {
                #[inline]
                fn to_float(&self) -> f64 {
                    *self as f64
                }
            }

            impl RoundDigits for $t {
                fn round_digits(&self, ndigits: i32) -> Self {
                    if ndigits >= 0 {
                        return *self;
                    }
                    match <$t as Ten>::TEN.checked_pow(ndigits.unsigned_abs()) {
                        Some(scale) => {
                            let (quotient, remainder) = (*self / scale, *self % scale);
                            let toward_zero = quotient * scale;
                            if remainder.unsigned_abs()
                                >= scale.unsigned_abs() - remainder.unsigned_abs()
                            {
                                // out of range away from zero falls back to the
                                // multiple toward zero
                                (quotient + self.signum())
                                    .checked_mul(scale)
                                    .unwrap_or(toward_zero)
                            } else {
                                toward_zero
                            }
                        }
                        // |self| < scale, so the multiple toward zero is 0
                        None => 0,
                    }
                }
            }

            impl ScalarDisplay for $t {
                #[inline]
                fn scalar_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t: ty),*$(,)?) => {
        $(
            impl ToFloat for $t {
                #[inline]
                fn to_float(&self) -> f64 {
                    *self as f64
                }
            }

            impl RoundDigits for $t {
                fn round_digits(&self, ndigits: i32) -> Self {
                    let x = *self;
                    if x == 0.0 || !x.is_finite() {
                        return x;
                    }
                    let magnitude = x.abs().log10().floor() as i32;
                    if ndigits > <$t>::DIGITS as i32 - magnitude {
                        // already exact at this precision
                        return x;
                    }
                    if ndigits < -(magnitude + 1) {
                        return 0.0;
                    }
                    let scale = <$t as Ten>::TEN.powi(ndigits.abs());
                    let rounded = if ndigits >= 0 {
                        (x * scale).round() / scale
                    } else {
                        (x / scale).round() * scale
                    };
                    if rounded.is_finite() { rounded } else { x }
                }
            }

            impl ScalarDisplay for $t {
                // `Debug` keeps the decimal point (`1.0`, `-0.0`) except in
                // exponent form, where `1e20` becomes `1.0e20`
                fn scalar_string(&self) -> String {
                    let s = format!("{self:?}");
                    match s.find(['e', 'E']) {
                        Some(idx) if !s[..idx].contains('.') => {
                            format!("{}.0{}", &s[..idx], &s[idx..])
                        }
                        _ => s,
                    }
                }
            }
        )*
    };
}
