//! Deserialization of plan documents
//!
//! Plans are TOML: a top-level numeric key is a standalone major
//! category, a top-level table is a group of minor categories. The
//! leaf-or-group decision is made here, once; the allocator never
//! inspects value types.

use std::fmt;

use toml::{Table, Value};

use crate::model::{
    amount::Percent,
    plan::{Major, Plan},
};

/// Failure to read a plan document
///
/// Unlike a bad amount this is fatal to the whole computation: there
/// is nothing sensible to display for half a plan.
#[derive(Debug)]
pub enum PlanError {
    /// not valid TOML at all
    Syntax(toml::de::Error),
    /// valid TOML with something else where a percentage is expected
    BadPercent {
        major: String,
        minor: Option<String>,
        found: &'static str,
    },
}

/// Resolve plan text into the major/minor tree
///
/// Declaration order is preserved. An empty document is an empty plan,
/// not an error.
pub fn parse(text: &str) -> Result<Plan, PlanError> {
    let table = text.parse::<Table>().map_err(PlanError::Syntax)?;
    let mut majors = Vec::new();
    for (name, value) in table {
        match value {
            Value::Integer(n) => majors.push((name, Major::Leaf(Percent(n as f64)))),
            Value::Float(x) => majors.push((name, Major::Leaf(Percent(x)))),
            Value::Table(group) => {
                let mut minors = Vec::new();
                for (minor, value) in group {
                    let pct = match value {
                        Value::Integer(n) => Percent(n as f64),
                        Value::Float(x) => Percent(x),
                        other => {
                            return Err(PlanError::BadPercent {
                                major: name,
                                minor: Some(minor),
                                found: other.type_str(),
                            })
                        }
                    };
                    minors.push((minor, pct));
                }
                majors.push((name, Major::Group(minors)));
            }
            other => {
                return Err(PlanError::BadPercent {
                    major: name,
                    minor: None,
                    found: other.type_str(),
                })
            }
        }
    }
    Ok(Plan::new(majors))
}

impl PlanError {
    /// What message to show to help fix the plan
    pub fn fix_hint(&self) -> String {
        match self {
            PlanError::Syntax(_) => "check the plan against the TOML syntax".to_string(),
            PlanError::BadPercent { minor: None, .. } => {
                "a major category holds a percentage or a table of minor categories".to_string()
            }
            PlanError::BadPercent { minor: Some(_), .. } => {
                "a minor category holds a plain percentage, e.g. 'Dining = 5'".to_string()
            }
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Syntax(e) => write!(f, "{}", e.message()),
            PlanError::BadPercent {
                major,
                minor: None,
                found,
            } => write!(
                f,
                "'{}' should be a percentage or a group of minor categories, found {}",
                major, found
            ),
            PlanError::BadPercent {
                major,
                minor: Some(minor),
                found,
            } => write!(
                f,
                "'{}.{}' should be a percentage, found {}",
                major, minor, found
            ),
        }
    }
}
