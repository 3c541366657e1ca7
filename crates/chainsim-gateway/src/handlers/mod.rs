//! HTTP handlers, one module per spec.md §6 route group.

pub mod address;
pub mod admin;
pub mod network;
pub mod transaction;
