use std::fmt;

use crate::model::summary::{Block, Breakdown};

/// Fixed-width text rendering of a breakdown
///
/// The output is framed by a `=` border, each major block ends with
/// the same border, and group blocks put a lighter rule between the
/// subtotal and the minor lines. Identical inputs render to identical
/// bytes, the widths below are part of the contract.
pub struct Table<'d> {
    data: &'d Breakdown,
}

const BORDER: &str = "=============================";
const RULE: &str = "-----------------------------";
/// Label field of a major line
const MAJOR_WIDTH: usize = 19;
/// Label field of a minor line, after the "> " marker
const MINOR_WIDTH: usize = 17;
/// Amount field, right-justified after the '$'
const AMOUNT_WIDTH: usize = 9;

impl<'d> Table<'d> {
    pub fn from(data: &'d Breakdown) -> Self {
        Self { data }
    }

    /// The report as a sequence of owned lines
    ///
    /// For callers that join with something other than a newline
    /// (an HTML break, a template row). The trailing empty line of
    /// the framed output is dropped.
    pub fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(String::from).collect()
    }
}

fn major_line(f: &mut fmt::Formatter, label: &str, amount: String) -> fmt::Result {
    writeln!(f, "{:<w$}${:>a$}", label, amount, w = MAJOR_WIDTH, a = AMOUNT_WIDTH)
}

fn minor_line(f: &mut fmt::Formatter, label: &str, amount: String) -> fmt::Result {
    writeln!(f, "> {:<w$}${:>a$}", label, amount, w = MINOR_WIDTH, a = AMOUNT_WIDTH)
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", BORDER)?;
        for block in self.data.blocks() {
            match block {
                Block::Leaf { label, amount } => {
                    major_line(f, label, amount.to_string())?;
                }
                Block::Group {
                    label,
                    subtotal,
                    minors,
                } => {
                    major_line(f, label, subtotal.to_string())?;
                    writeln!(f, "{}", RULE)?;
                    for (name, amount) in minors {
                        minor_line(f, name, amount.to_string())?;
                    }
                }
            }
            writeln!(f, "{}", BORDER)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::load::{amount::parse_dollar, error::Record, plan};
    use crate::model::{amount::Amount, summary::Breakdown};

    fn render(plan_text: &str, total: Amount) -> String {
        let plan = plan::parse(plan_text).unwrap();
        Table::from(&Breakdown::compute(&plan, total)).to_string()
    }

    #[test]
    fn borders_are_29_wide() {
        assert_eq!(BORDER.len(), 29);
        assert_eq!(RULE.len(), 29);
    }

    #[test]
    fn full_report() {
        let text = "Housing = 30\n\n[Food]\nGroceries = 15\nDining = 5\nTotal = 0\n";
        let mut errs = Record::new();
        let total = parse_dollar("$1,000.00", &mut errs);
        assert!(errs.is_empty());
        assert_eq!(total, Amount(100000));
        let expected = "\
=============================
Housing            $   300.00
=============================
Food               $   200.00
-----------------------------
> Groceries        $   150.00
> Dining           $    50.00
=============================
";
        let out = render(text, total);
        assert_eq!(out, expected);
        // "> " marker plus the 17-wide label field puts '$' at index 19
        for line in out.lines().filter(|l| l.starts_with("> ")) {
            assert_eq!(line.find('$'), Some(19));
        }
    }

    #[test]
    fn every_line_of_a_report_is_29_chars() {
        let text = "Housing = 30\n\n[Food]\nGroceries = 15\nDining = 5\n";
        for line in render(text, Amount(100000)).lines() {
            assert_eq!(line.len(), 29, "line {:?}", line);
        }
    }

    #[test]
    fn long_labels_are_not_truncated() {
        let out = render("EmergencySinkingFundReserve = 10\n", Amount(100000));
        assert!(out.contains("EmergencySinkingFundReserve"));
    }

    #[test]
    fn empty_plan_is_just_the_border() {
        assert_eq!(render("", Amount(12345)), "=============================\n");
    }

    #[test]
    fn invalid_amount_still_renders_a_zeroed_report() {
        let mut errs = Record::new();
        let total = parse_dollar("5e2", &mut errs);
        assert_eq!(errs.count_warnings(), 1);
        let out = render("Housing = 30\n", total);
        assert!(out.contains("Housing            $     0.00"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let text = "Housing = 30\n\n[Food]\nGroceries = 15\nDining = 5\n";
        let plan = plan::parse(text).unwrap();
        let sum = Breakdown::compute(&plan, Amount(123456));
        let first = Table::from(&sum).to_string();
        let second = Table::from(&Breakdown::compute(&plan, Amount(123456))).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn lines_drop_the_trailing_newline() {
        let out = Table::from(&Breakdown::compute(
            &plan::parse("Housing = 30\n").unwrap(),
            Amount(100000),
        ))
        .lines();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], BORDER);
        assert_eq!(out[2], BORDER);
    }
}
