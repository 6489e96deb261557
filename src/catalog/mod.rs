//! Quote catalog: the fixed, ordered list of quotes every query runs over.
//!
//! The set of categories is never declared on its own; it is whatever the
//! loaded quotes carry.

mod builtin;
mod catalog;
mod quote;

pub use catalog::{Catalog, ALL_CATEGORIES};
pub use quote::Quote;
