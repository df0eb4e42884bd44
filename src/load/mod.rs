pub mod amount;
pub mod error;
pub mod plan;

use crate::model::plan::Plan;

/// Load and resolve the plan stored in `filename`
///
/// Failures (missing file, invalid document) are recorded as fatal
/// diagnostics; callers should check `errs.is_fatal()`.
pub fn read_plan(filename: &str, errs: &mut error::Record) -> Option<Plan> {
    let contents = match std::fs::read_to_string(filename) {
        Ok(contents) => contents,
        Err(_) => {
            errs.make("File not found")
                .text(format!("Plan file loaded is '{}'", filename))
                .hint("create the plan file or load a different one");
            return None;
        }
    };
    match plan::parse(&contents) {
        Ok(plan) => Some(plan),
        Err(e) => {
            errs.make("Invalid plan")
                .text(format!("{}", e))
                .hint(e.fix_hint());
            None
        }
    }
}
