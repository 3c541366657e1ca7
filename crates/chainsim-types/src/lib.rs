//! Shared primitives for the chain simulator workspace: address/amount
//! aliases, the `{data, code}` / `{error, code}` response envelope, and the
//! `ChainError` scaffolding every higher crate maps its failures onto.

mod envelope;
mod error;
mod primitives;

pub use envelope::Envelope;
pub use error::ChainError;
pub use primitives::{Address, Amount, ADDRESS_LEN};
