use crate::model::{
    amount::Amount,
    plan::{Major, Plan},
};

/// Reserved minor name, present in old plan files for display only
///
/// Matched case-insensitively and never counted in a subtotal.
const TOTAL: &str = "total";

/// One computed major category
#[derive(Debug, Clone)]
pub enum Block {
    Leaf {
        label: String,
        amount: Amount,
    },
    Group {
        label: String,
        subtotal: Amount,
        minors: Vec<(String, Amount)>,
    },
}

/// Per-category dollar breakdown of one total against one plan
#[derive(Debug, Clone)]
pub struct Breakdown {
    blocks: Vec<Block>,
}

impl Breakdown {
    /// Walk the plan in declaration order and compute each share
    ///
    /// Each line is truncated to the cent before it enters its group
    /// subtotal; the subtotal is an exact sum of the truncated lines
    /// and is never truncated again. Each group block is assembled in
    /// a single pass, subtotal first once all minors are known.
    pub fn compute(plan: &Plan, total: Amount) -> Self {
        let mut blocks = Vec::new();
        for (label, major) in plan.majors() {
            match major {
                Major::Leaf(pct) => {
                    blocks.push(Block::Leaf {
                        label: label.clone(),
                        amount: total.share(*pct),
                    });
                }
                Major::Group(entries) => {
                    let mut subtotal = Amount::ZERO;
                    let mut minors = Vec::new();
                    for (name, pct) in entries {
                        if name.eq_ignore_ascii_case(TOTAL) {
                            continue;
                        }
                        let amount = total.share(*pct);
                        subtotal += amount;
                        minors.push((name.clone(), amount));
                    }
                    blocks.push(Block::Group {
                        label: label.clone(),
                        subtotal,
                        minors,
                    });
                }
            }
        }
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
