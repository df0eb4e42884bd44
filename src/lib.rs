//! Budgeting income the easy way
//!
//! `budg` splits a dollar total over the percentages of a plan and
//! renders the result as a fixed-width table. A plan is a small TOML
//! document: a top-level number is a standalone major category, a
//! table is a group of minor categories.
//!
//! ```toml
//! Housing = 30
//!
//! [Food]
//! Groceries = 15
//! Dining = 5
//! ```
//!
//! The whole computation is pure: same plan and same total always
//! produce byte-identical output. A malformed amount degrades to zero
//! with a recorded warning, a malformed plan is a hard error.

pub mod load;
pub mod model;
pub mod render;

use load::{error::Record, plan::PlanError};
use model::summary::Breakdown;
use render::table::Table;

/// One full computation: raw amount and plan text in, report out
///
/// Amount diagnostics are nonfatal and land in `errs` (an invalid
/// amount yields an all-zero report). A plan that fails to
/// deserialize is fatal and comes back as the error. Callers that
/// want individual lines can split on `'\n'` or go through
/// [`Table::lines`] directly.
pub fn breakdown(plan_text: &str, raw_amount: &str, errs: &mut Record) -> Result<String, PlanError> {
    let total = load::amount::parse_dollar(raw_amount, errs);
    let plan = load::plan::parse(plan_text)?;
    let summary = Breakdown::compute(&plan, total);
    Ok(Table::from(&summary).to_string())
}
