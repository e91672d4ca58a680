//! Shared response envelopes.

mod response;

pub use response::{Created, DeletedResponse, ItemResponse, ListResponse};
