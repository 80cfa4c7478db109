mod category;
mod summary;

pub use category::Category;
pub use summary::{CategorySummary, CurationSummary};
