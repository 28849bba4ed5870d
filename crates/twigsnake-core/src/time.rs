//! Line header rendering: timestamps, caller location and prefix placement.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{Display, Write};
use std::panic::Location;
use twigsnake_types::Flags;

/// Source position printed by the `LONG_FILE` and `SHORT_FILE` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Source file path as reported by the compiler
    pub file: &'a str,
    /// One-based line number
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Final path component of the file.
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Render one complete entry: header, message and line terminator.
///
/// Layout: `[prefix][date ][time[.micros] ][file:line: ][msgprefix]message\n`.
/// A terminator is appended only when `message` does not already end in one.
pub(crate) fn render_entry(
    now: DateTime<Utc>,
    flags: Flags,
    prefix: &str,
    site: Option<CallSite<'_>>,
    message: &str,
) -> String {
    let mut line = String::with_capacity(prefix.len() + message.len() + 32);

    if !flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }

    if flags.has_timestamp() {
        if flags.contains(Flags::UTC) {
            push_timestamp(&mut line, &now, flags);
        } else {
            push_timestamp(&mut line, &now.with_timezone(&Local), flags);
        }
    }

    if flags.has_location() {
        if let Some(site) = site {
            let file = if flags.contains(Flags::SHORT_FILE) {
                site.short_file()
            } else {
                site.file
            };
            let _ = write!(line, "{}:{}: ", file, site.line);
        }
    }

    if flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }

    line.push_str(message);
    if !message.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn push_timestamp<Tz>(line: &mut String, at: &DateTime<Tz>, flags: Flags)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(line, "{} ", at.format("%Y/%m/%d"));
    }
    if flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS) {
        let _ = write!(line, "{}", at.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(line, "{}", at.format("%.6f"));
        }
        line.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 5, 16, 21, 32).unwrap()
            + chrono::Duration::microseconds(100_005)
    }

    const SITE: CallSite<'static> = CallSite {
        file: "crates/app/src/main.rs",
        line: 42,
    };

    #[test]
    fn test_default_layout() {
        let line = render_entry(fixed(), Flags::DEFAULT | Flags::UTC, "[INFO] ", None, "ready");
        assert_eq!(line, "2021/03/05 16:21:32 [INFO] ready\n");
    }

    #[test]
    fn test_prefix_at_line_start_without_msgprefix() {
        let line = render_entry(fixed(), Flags::STD | Flags::UTC, "[INFO] ", None, "ready");
        assert_eq!(line, "[INFO] 2021/03/05 16:21:32 ready\n");
    }

    #[test]
    fn test_microseconds_without_prefix() {
        let line = render_entry(
            fixed(),
            Flags::DATE | Flags::MICROSECONDS | Flags::UTC,
            "",
            None,
            "m",
        );
        assert_eq!(line, "2021/03/05 16:21:32.100005 m\n");
    }

    #[test]
    fn test_no_flags_is_bare_message() {
        assert_eq!(render_entry(fixed(), Flags::NONE, "", Some(SITE), "m"), "m\n");
    }

    #[test]
    fn test_existing_terminator_kept() {
        assert_eq!(render_entry(fixed(), Flags::NONE, "", None, "m\n"), "m\n");
        assert_eq!(render_entry(fixed(), Flags::NONE, "", None, "m\n\n"), "m\n\n");
    }

    #[test]
    fn test_file_flags() {
        let long = render_entry(fixed(), Flags::LONG_FILE, "", Some(SITE), "m");
        assert_eq!(long, "crates/app/src/main.rs:42: m\n");

        let short = render_entry(
            fixed(),
            Flags::LONG_FILE | Flags::SHORT_FILE,
            "",
            Some(SITE),
            "m",
        );
        assert_eq!(short, "main.rs:42: m\n");

        let with_prefix = render_entry(
            fixed(),
            Flags::SHORT_FILE | Flags::MSG_PREFIX,
            "[D] ",
            Some(SITE),
            "m",
        );
        assert_eq!(with_prefix, "main.rs:42: [D] m\n");
    }

    #[test]
    fn test_short_file_windows_separator() {
        let site = CallSite { file: r"src\lib.rs", line: 1 };
        assert_eq!(site.short_file(), "lib.rs");
    }
}
