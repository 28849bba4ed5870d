//! Output flags controlling the metadata written before each log line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use crate::enums::Flag;

/// Set of [`Flag`]s, combined with `|`.
///
/// With `DATE | TIME` a line reads `2009/01/23 01:23:23 message`.
/// `SHORT_FILE` wins over `LONG_FILE` when both are set, and
/// `MICROSECONDS` implies `TIME`.
///
/// ```
/// use twigsnake_types::Flags;
///
/// let flags = Flags::DATE | Flags::MICROSECONDS;
/// assert!(flags.contains(Flags::DATE));
/// assert!(!flags.contains(Flags::MSG_PREFIX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Flag>", into = "Vec<Flag>")]
pub struct Flags(u8);

impl Flags {
    /// No metadata at all
    pub const NONE: Flags = Flags(0);
    /// Date in the local time zone
    pub const DATE: Flags = Flags(1 << 0);
    /// Time in the local time zone
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution, implies `TIME`
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full caller path and line number
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Caller file name and line number, overrides `LONG_FILE`
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render timestamps in UTC
    pub const UTC: Flags = Flags(1 << 5);
    /// Put the prefix right before the message instead of at line start
    pub const MSG_PREFIX: Flags = Flags(1 << 6);

    /// Initial flags of a bare sub-logger: date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    /// Flags a leveled logger installs on every sub-logger.
    pub const DEFAULT: Flags = Flags(Self::STD.0 | Self::MSG_PREFIX.0);

    const TABLE: [(Flag, Flags); 7] = [
        (Flag::Date, Flags::DATE),
        (Flag::Time, Flags::TIME),
        (Flag::Microseconds, Flags::MICROSECONDS),
        (Flag::LongFile, Flags::LONG_FILE),
        (Flag::ShortFile, Flags::SHORT_FILE),
        (Flag::Utc, Flags::UTC),
        (Flag::MsgPrefix, Flags::MSG_PREFIX),
    ];

    /// Raw bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether a timestamp of any kind is rendered.
    pub const fn has_timestamp(self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    /// Whether the caller location is rendered.
    pub const fn has_location(self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }

    /// Individual flags that are set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Self::TABLE
            .into_iter()
            .filter(move |(_, bits)| self.contains(*bits))
            .map(|(flag, _)| flag)
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Date => Flags::DATE,
            Flag::Time => Flags::TIME,
            Flag::Microseconds => Flags::MICROSECONDS,
            Flag::LongFile => Flags::LONG_FILE,
            Flag::ShortFile => Flags::SHORT_FILE,
            Flag::Utc => Flags::UTC,
            Flag::MsgPrefix => Flags::MSG_PREFIX,
        }
    }
}

impl From<Vec<Flag>> for Flags {
    fn from(flags: Vec<Flag>) -> Self {
        flags.into_iter().collect()
    }
}

impl From<Flags> for Vec<Flag> {
    fn from(flags: Flags) -> Self {
        flags.iter().collect()
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Flags::NONE, |acc, flag| acc | Flags::from(flag))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::TABLE.iter().fold(0, |acc, (_, bits)| acc | bits.0))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.iter().map(|flag| flag.to_string()).collect();
        write!(f, "{}", names.join("|"))
    }
}
