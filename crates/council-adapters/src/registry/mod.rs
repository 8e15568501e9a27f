//! Adapter registry
//!
//! Maps tool names to adapters. Built once per invocation and passed by
//! reference; it holds no global state.

mod builtins;
mod store;

pub use builtins::builtin_adapters;
pub use store::AdapterRegistry;
