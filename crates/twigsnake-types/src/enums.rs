//! Common enumerations used throughout twigsnake.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{TwigsnakeError, Result};

/// Log severity levels as defined in RFC 5424 section 6.2.1.
///
/// Lower ordinals are more urgent. A logger admits a message when its
/// threshold is numerically greater than or equal to the message severity,
/// so the derived ordering is the filtering order.
///
/// Serializes as the lowercase full name. Deserialization accepts whatever
/// [`FromStr`] accepts, plus bare ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// System is unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal, but significant conditions
    Notice = 5,
    /// Informational messages
    Informational = 6,
    /// Debug-level messages
    Debug = 7,
}

impl Severity {
    /// Every severity, most urgent first. Index `i` holds ordinal `i`.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Informational,
        Severity::Debug,
    ];

    /// Number of defined severities.
    pub const COUNT: usize = Self::ALL.len();

    /// Numeric rank of this severity (0 = emergency, 7 = debug).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a severity by its numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`TwigsnakeError::InvalidSeverity`] for anything above 7.
    pub fn from_ordinal(ordinal: u8) -> Result<Self> {
        match Self::ALL.get(usize::from(ordinal)) {
            Some(severity) => Ok(*severity),
            None => crate::bail!(InvalidSeverity, "{} (expected 0..=7)", ordinal),
        }
    }

    /// Position of this severity in [`Severity::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase full name, as used in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Informational => "informational",
            Severity::Debug => "debug",
        }
    }

    /// Uppercase tag used inside the default line prefix.
    pub const fn short_name(self) -> &'static str {
        match self {
            Severity::Emergency => "EMERG",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRIT",
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Notice => "NOTICE",
            Severity::Informational => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Prefix installed on this severity's sub-logger at construction,
    /// e.g. `"[INFO] "`. The trailing space is part of the prefix.
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Severity::Emergency => "[EMERG] ",
            Severity::Alert => "[ALERT] ",
            Severity::Critical => "[CRIT] ",
            Severity::Error => "[ERROR] ",
            Severity::Warning => "[WARN] ",
            Severity::Notice => "[NOTICE] ",
            Severity::Informational => "[INFO] ",
            Severity::Debug => "[DEBUG] ",
        }
    }

    /// Whether a logger whose threshold is `self` admits a message at `message`.
    pub fn admits(self, message: Severity) -> bool {
        message == Severity::Emergency || self >= message
    }
}

impl FromStr for Severity {
    type Err = TwigsnakeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<u8>() {
            return Self::from_ordinal(ordinal);
        }

        match trimmed.to_uppercase().as_str() {
            "EMERG" | "EMERGENCY" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            "ERR" | "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" | "INFORMATIONAL" => Ok(Severity::Informational),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(TwigsnakeError::InvalidSeverity(format!("'{}'", s))),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeverityVisitor;

        impl<'de> Visitor<'de> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity name or an ordinal in 0..=7")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Severity, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Severity, E> {
                match u8::try_from(value) {
                    Ok(ordinal) => Severity::from_ordinal(ordinal).map_err(E::custom),
                    Err(_) => Err(E::custom(format_args!(
                        "invalid severity level: {} (expected 0..=7)",
                        value
                    ))),
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Severity, E> {
                match u64::try_from(value) {
                    Ok(ordinal) => self.visit_u64(ordinal),
                    Err(_) => Err(E::custom(format_args!(
                        "invalid severity level: {} (expected 0..=7)",
                        value
                    ))),
                }
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

impl TryFrom<u8> for Severity {
    type Error = TwigsnakeError;

    fn try_from(ordinal: u8) -> Result<Self> {
        Self::from_ordinal(ordinal)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.ordinal()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A single output flag, the configuration-facing view of [`crate::Flags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// Date in the local time zone: 2009/01/23
    Date,
    /// Time in the local time zone: 01:23:23
    Time,
    /// Microsecond resolution: 01:23:23.123123
    Microseconds,
    /// Full file name and line number: /a/b/c/d.rs:23
    LongFile,
    /// Final file name element and line number: d.rs:23
    ShortFile,
    /// Use UTC rather than the local time zone
    Utc,
    /// Move the prefix from the beginning of the line to before the message
    MsgPrefix,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Date => write!(f, "date"),
            Flag::Time => write!(f, "time"),
            Flag::Microseconds => write!(f, "microseconds"),
            Flag::LongFile => write!(f, "long_file"),
            Flag::ShortFile => write!(f, "short_file"),
            Flag::Utc => write!(f, "utc"),
            Flag::MsgPrefix => write!(f, "msg_prefix"),
        }
    }
}
