//! Domain types for owner records.

pub mod owner;
pub mod search;

pub use owner::{NewOwner, Owner};
pub use search::SearchCriteria;
