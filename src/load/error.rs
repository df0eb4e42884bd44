//! Aggregation and pretty-printing of user-facing diagnostics
//!
//! Diagnostics are either fatal (the computation cannot proceed) or
//! nonfatal (the computation degrades but still produces a report).
//! Messages are built incrementally:
//!
//! ```text
//! errs.make("Could not interpret value")
//!     .nonfatal()
//!     .text("'.32' does not read as a dollar amount")
//!     .hint("use a value in the form XXX.XX")
//! ```
//!
//! and rendered with a colored label followed by one line per item.

use std::fmt;

/// Report for a single diagnostic
///
/// All messages (`label` passed to `make`, arguments of `text` and
/// `hint`) should fit in a single line.
#[must_use]
#[derive(Debug)]
pub struct Error {
    /// determines the label (warning/error) and the color (yellow/red)
    fatal: bool,
    /// name of the error
    label: String,
    items: Vec<Item>,
}

/// Kinds of items that can be added to a diagnostic
#[derive(Debug)]
enum Item {
    /// important message
    Text(String),
    /// recommendation for a fix
    Hint(String),
}

/// A collection of diagnostics
///
/// Typically one per computation, but the structure itself makes no
/// assumption about the relationship between its entries.
#[must_use]
#[derive(Debug, Default)]
pub struct Record {
    /// how many of `contents[..contents.len()-1]` are fatal
    fatal: usize,
    contents: Vec<Error>,
}

impl Error {
    /// Create a new diagnostic, fatal unless downgraded with `nonfatal`
    pub fn new<S>(msg: S) -> Self
    where
        S: ToString,
    {
        Self {
            fatal: true,
            label: msg.to_string(),
            items: Vec::new(),
        }
    }

    /// Mark as a warning rather than a fatal error
    pub fn nonfatal(&mut self) -> &mut Self {
        self.fatal = false;
        self
    }

    /// Add an important note
    pub fn text<S>(&mut self, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Text(msg.to_string()));
        self
    }

    /// Add a hint on how to fix
    pub fn hint<S>(&mut self, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Hint(msg.to_string()));
        self
    }
}

impl Record {
    /// Initialize a new pool of diagnostics
    pub fn new() -> Self {
        Self {
            fatal: 0,
            contents: Vec::new(),
        }
    }

    /// Checks if any of the recorded diagnostics is fatal
    pub fn is_fatal(&self) -> bool {
        self.fatal > 0 || self.last_is_fatal()
    }

    fn last_is_fatal(&self) -> bool {
        self.contents.last().map(|e| e.fatal).unwrap_or(false)
    }

    /// Number of fatal diagnostics
    pub fn count_errors(&self) -> usize {
        self.fatal + if self.last_is_fatal() { 1 } else { 0 }
    }

    /// Number of nonfatal diagnostics
    pub fn count_warnings(&self) -> usize {
        self.contents.len() - self.count_errors()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Add a new diagnostic to the pool
    pub fn make<S>(&mut self, msg: S) -> &mut Error
    where
        S: ToString,
    {
        if self.last_is_fatal() {
            self.fatal += 1;
        }
        self.contents.push(Error::new(msg));
        self.contents.last_mut().unwrap()
    }
}

const RED: &str = "\x1b[0;91;1m";
const YELLOW: &str = "\x1b[0;93;1m";
const BLUE: &str = "\x1b[0;96;1m";
const WHITE: &str = "\x1b[0;1m";
const NONE: &str = "\x1b[0m";

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (color, header) = if self.fatal {
            (RED, "--> Error")
        } else {
            (YELLOW, "--> Warning")
        };
        writeln!(f, "{}{}:{} {}{}", color, header, WHITE, self.label, NONE)?;
        for item in &self.items {
            match item {
                Item::Text(txt) => {
                    writeln!(f, " {}|  {}{}{}", color, WHITE, txt, NONE)?;
                }
                Item::Hint(txt) => {
                    writeln!(f, " {}|      {}? hint: {}{}", color, BLUE, NONE, txt)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contents.is_empty() {
            return Ok(());
        }
        let fatal = self.is_fatal();
        let count = if fatal {
            self.count_errors()
        } else {
            self.count_warnings()
        };
        let color = if fatal { RED } else { YELLOW };
        let trunc = 10;
        // only print diagnostics with the maximum fatality
        for err in self
            .contents
            .iter()
            .filter(|err| err.fatal == fatal)
            .take(trunc)
        {
            writeln!(f, "{}", err)?;
        }
        if count > trunc {
            writeln!(f, "{} And {} more.", color, count - trunc)?;
        }
        let plural = if count > 1 { "s" } else { "" };
        if fatal {
            writeln!(
                f,
                "{}Fatal: {}{} error{} emitted{}",
                color, WHITE, count, plural, NONE
            )?;
        } else {
            writeln!(
                f,
                "{}Nonfatal: {}{} warning{} emitted{}",
                color, WHITE, count, plural, NONE
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fatality_counts() {
        let mut errs = Record::new();
        assert!(errs.is_empty());
        assert!(!errs.is_fatal());
        errs.make("bad value").nonfatal().hint("fix it");
        assert!(!errs.is_fatal());
        assert_eq!(errs.count_warnings(), 1);
        errs.make("broken plan").text("unreadable");
        assert!(errs.is_fatal());
        assert_eq!(errs.count_errors(), 1);
        assert_eq!(errs.count_warnings(), 1);
    }

    #[test]
    fn empty_record_prints_nothing() {
        let errs = Record::new();
        assert_eq!(format!("{}", errs), "");
    }

    #[test]
    fn messages_surface_in_output() {
        let mut errs = Record::new();
        errs.make("Could not interpret value")
            .nonfatal()
            .text("'abc' does not read as a dollar amount")
            .hint("use a value in the form XXX.XX");
        let shown = format!("{}", errs);
        assert!(shown.contains("Could not interpret value"));
        assert!(shown.contains("XXX.XX"));
        assert!(shown.contains("Warning"));
    }
}
