pub mod amount;
pub mod plan;
pub mod summary;
