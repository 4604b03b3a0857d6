pub mod types;

pub use types::{Finding, NdaDocument, ReviewReport, ReviewStatus};
