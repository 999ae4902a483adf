//! Todo Core
//!
//! Domain layer of the todo list widget:
//! - domain: `Todo`, `TodoId`, `Filter` and errors
//! - store: key-value persistence contract and snapshot codec
//! - controller: the list controller and its `dispatch` entry point
//! - projection: display state computed after every mutation
//! - export: downloadable JSON document
//!
//! Nothing here touches the browser; the frontend supplies a
//! `KeyValueStore` backed by `localStorage` and renders `Projection`s.

mod clock;
mod config;
mod controller;
mod domain;
mod export;
mod intent;
mod projection;
mod store;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{TodoConfig, DEFAULT_EXPORT_PREFIX, DEFAULT_REMOVAL_DELAY_MS, DEFAULT_STORAGE_KEY};
pub use controller::TodoController;
pub use domain::{Filter, Todo, TodoError, TodoId, TodoResult, MAX_TODO_ID};
pub use export::ExportDocument;
pub use intent::{Effect, Intent};
pub use projection::{empty_message, Counts, ListBody, Projection, Row};
pub use store::{decode_snapshot, encode_snapshot, load_snapshot, save_snapshot, KeyValueStore, MemoryStore};
