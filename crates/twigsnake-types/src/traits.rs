//! Core trait definitions for twigsnake abstractions.

use crate::enums::Severity;
use crate::errors::{TwigsnakeError, Result};

/// Fallible conversion of caller input into a [`Severity`].
///
/// Logger constructors and threshold setters accept anything implementing
/// this trait, so raw ordinals coming from a command line or a config value
/// are validated in one place.
///
/// ```
/// use twigsnake_types::{IntoSeverity, Severity};
///
/// assert_eq!(6u8.into_severity().unwrap(), Severity::Informational);
/// assert_eq!("debug".into_severity().unwrap(), Severity::Debug);
/// assert!(9u8.into_severity().is_err());
/// assert!((-1i32).into_severity().is_err());
/// ```
pub trait IntoSeverity {
    /// Validate and convert.
    ///
    /// # Errors
    ///
    /// Returns [`TwigsnakeError::InvalidSeverity`] when the value does not
    /// name one of the eight severities.
    fn into_severity(self) -> Result<Severity>;
}

impl IntoSeverity for Severity {
    fn into_severity(self) -> Result<Severity> {
        Ok(self)
    }
}

impl IntoSeverity for &str {
    fn into_severity(self) -> Result<Severity> {
        self.parse()
    }
}

impl IntoSeverity for &String {
    fn into_severity(self) -> Result<Severity> {
        self.parse()
    }
}

impl IntoSeverity for String {
    fn into_severity(self) -> Result<Severity> {
        self.parse()
    }
}

macro_rules! impl_into_severity_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoSeverity for $ty {
                fn into_severity(self) -> Result<Severity> {
                    u8::try_from(self)
                        .map_err(|_| {
                            TwigsnakeError::InvalidSeverity(format!("{} (expected 0..=7)", self))
                        })
                        .and_then(Severity::from_ordinal)
                }
            }
        )*
    };
}

impl_into_severity_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_severity_is_identity() {
        for severity in Severity::ALL {
            assert_eq!(severity.into_severity().unwrap(), severity);
        }
    }

    #[test]
    fn test_owned_and_borrowed_strings() {
        let name = String::from("notice");
        assert_eq!((&name).into_severity().unwrap(), Severity::Notice);
        assert_eq!(name.into_severity().unwrap(), Severity::Notice);
        assert!(String::from("loud").into_severity().is_err());
    }

    #[test]
    fn test_error_message_names_value() {
        let err = 300i32.into_severity().unwrap_err();
        assert_eq!(err.to_string(), "invalid severity level: 300 (expected 0..=7)");
    }

    proptest! {
        #[test]
        fn prop_integers_validate_range(raw in any::<i64>()) {
            let converted = raw.into_severity();
            if (0..=7).contains(&raw) {
                prop_assert_eq!(i64::from(converted.unwrap().ordinal()), raw);
            } else {
                prop_assert!(matches!(converted, Err(TwigsnakeError::InvalidSeverity(_))));
            }
        }
    }
}
