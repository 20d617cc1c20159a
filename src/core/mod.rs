pub mod geo;
pub mod selector;

pub use selector::{Filters, MAX_RESULTS, select};
