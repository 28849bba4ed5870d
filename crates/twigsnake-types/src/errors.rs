//! Error types for twigsnake operations.

use thiserror::Error;

/// The error type for twigsnake operations.
///
/// Emitting a message never fails from the caller's point of view; these
/// errors come only from validating severities and reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwigsnakeError {
    /// A severity value outside the eight defined levels
    #[error("invalid severity level: {0}")]
    InvalidSeverity(String),

    /// Malformed logger configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for twigsnake operations.
pub type Result<T> = std::result::Result<T, TwigsnakeError>;

/// Helper macro to bail out with a TwigsnakeError.
///
/// # Example
///
/// ```ignore
/// if raw > 7 {
///     bail!(InvalidSeverity, "{} is outside 0..=7", raw);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::TwigsnakeError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::TwigsnakeError::$variant(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(raw: i64) -> Result<()> {
        if !(0..=7).contains(&raw) {
            bail!(InvalidSeverity, "{} is outside 0..=7", raw);
        }
        Ok(())
    }

    #[test]
    fn test_bail_builds_variant() {
        assert!(reject(3).is_ok());
        assert_eq!(
            reject(9),
            Err(TwigsnakeError::InvalidSeverity("9 is outside 0..=7".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = TwigsnakeError::InvalidSeverity("9".to_string());
        assert_eq!(err.to_string(), "invalid severity level: 9");
    }
}
