//! The transaction-dispatch engine: tx-data parsing, the dispatcher,
//! retention ring, read-only query executor, and response shaping.

pub mod dispatcher;
pub mod dto;
pub mod parser;
pub mod query;
pub mod response;
pub mod retention;

pub use dispatcher::{Dispatcher, DispatcherConfig};
pub use dto::{RawQuery, RawTx};
