use crate::model::amount::Percent;

/// A plan splits a total over major categories, each of which is either
/// a single percentage or a group of minor percentages
///
/// Majors and minors keep their declaration order from the source
/// document, the allocator walks them in that order.
#[derive(Debug, Clone)]
pub struct Plan {
    majors: Vec<(String, Major)>,
}

/// Value of a major category, resolved once at load time
#[derive(Debug, Clone)]
pub enum Major {
    Leaf(Percent),
    Group(Vec<(String, Percent)>),
}

impl Plan {
    pub fn new(majors: Vec<(String, Major)>) -> Self {
        Self { majors }
    }

    pub fn majors(&self) -> &[(String, Major)] {
        &self.majors
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }
}
