//! Validation of raw dollar-amount strings
//!
//! The accepted format is deliberately narrow:
//! - no alphabet characters: `123.45`, not `5e2`
//! - an optional leading dollar sign: `$123.45`
//! - optional thousands separators, in groups of exactly three:
//!   `123,456.78` but neither `1234,567` nor `123,45`
//! - at most two decimal places, and values under a dollar start
//!   with a zero: `0.32`, never `.32`
//!
//! A string that does not match degrades to a zero amount with a
//! nonfatal diagnostic, it never aborts the computation.

use pest::Parser;
use pest_derive::Parser;

use crate::load::error;
use crate::model::amount::Amount;

/// Pest-generated parser for the dollar grammar
#[derive(Parser)]
#[grammar = "load/dollar.pest"]
struct DollarParser;

/// Read `raw` as a dollar amount
///
/// Returns zero and records a diagnostic when `raw` does not follow
/// the grammar. `5.5` reads as 5.50, standard decimal semantics.
pub fn parse_dollar(raw: &str, errs: &mut error::Record) -> Amount {
    match DollarParser::parse(Rule::dollar, raw) {
        Ok(_) => {
            let plain = raw.replace(',', "").replace('$', "");
            // safe to .unwrap() because the grammar validated it already
            let value = plain.parse::<f64>().unwrap();
            Amount((value * 100.0).round() as i64)
        }
        Err(_) => {
            let err = errs
                .make("Could not interpret value")
                .nonfatal()
                .text(format!("'{}' does not read as a dollar amount", raw))
                .hint("use a value in the form XXX.XX");
            if raw.starts_with('.') {
                err.hint("values less than a dollar must start with a 0, e.g. .32 -> 0.32");
            }
            Amount::ZERO
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! ok {
        ( $raw:expr => $cents:expr ) => {
            let mut errs = error::Record::new();
            assert_eq!(parse_dollar($raw, &mut errs), Amount($cents));
            assert!(errs.is_empty());
        };
    }
    macro_rules! no {
        ( $raw:expr ) => {
            let mut errs = error::Record::new();
            assert_eq!(parse_dollar($raw, &mut errs), Amount(0));
            assert_eq!(errs.count_warnings(), 1);
            assert!(!errs.is_fatal());
        };
    }

    #[test]
    fn plain_amounts() {
        ok!("123" => 12300);
        ok!("123.45" => 12345);
        ok!("0.32" => 32);
        ok!("5.5" => 550);
        ok!("123." => 12300);
        ok!("007" => 700);
        ok!("0" => 0);
    }

    #[test]
    fn dollar_signs() {
        ok!("$123.45" => 12345);
        ok!("$0.99" => 99);
        no!("$$5");
        no!("5$");
        no!("$");
    }

    #[test]
    fn comma_grouping() {
        ok!("1,234,567" => 123456700);
        ok!("1,200" => 120000);
        ok!("$1,000.00" => 100000);
        ok!("123,456.78" => 12345678);
        no!("1234,567");
        no!("123,45");
        no!("1,2345");
        no!(",123");
        no!("1,");
    }

    #[test]
    fn junk() {
        no!("");
        no!("5e2");
        no!("abc");
        no!("12a");
        no!("-5");
        no!("+5");
        no!(" 123");
        no!("123 ");
        no!("12 3");
        no!("1.234");
        no!("1..2");
    }

    #[test]
    fn leading_dot_gets_the_extra_hint() {
        let mut errs = error::Record::new();
        assert_eq!(parse_dollar(".32", &mut errs), Amount(0));
        assert!(format!("{}", errs).contains(".32 -> 0.32"));

        // the hint is reserved for leading dots
        let mut errs = error::Record::new();
        parse_dollar("x32", &mut errs);
        assert!(!format!("{}", errs).contains(".32 -> 0.32"));
    }
}
