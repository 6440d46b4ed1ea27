//! Structured model responses.
//!
//! The remote payload stays an opaque [`serde_json::Value`]; this module only
//! knows where the answer and a few metadata fields live inside it.

pub mod metadata;
pub mod shape;
