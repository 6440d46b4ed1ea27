//! Application-level configuration.
//!
//! - [`InvocationOptions`]: per-call parameters for the remote model

pub mod invocation_options;

pub use invocation_options::InvocationOptions;
