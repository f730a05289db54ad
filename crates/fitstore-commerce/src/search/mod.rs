//! Product filtering and sorting.

mod query;

pub use query::{apply, ProductQuery, SortKey};
