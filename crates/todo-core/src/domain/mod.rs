//! Domain Layer
//!
//! Entities and errors. No browser or storage dependencies.

mod error;
mod filter;
mod timestamp;
mod todo;

pub use error::{TodoError, TodoResult};
pub use filter::Filter;
pub use todo::{Todo, TodoId, MAX_TODO_ID};

pub(crate) use timestamp::iso_millis;
