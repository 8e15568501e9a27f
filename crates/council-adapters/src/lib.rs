//! Tool adapters for council sync.
//!
//! Every supported AI coding assistant is described by an [`Adapter`]: where
//! its agent and command files live, how an expert becomes one of its files,
//! which commands it ships with, and which locations earlier layouts used.
//!
//! # Architecture
//!
//! 1. **Directory adapters** write one file per expert and one per command.
//!    The built-in ones (`claude`, `codex`, `gemini`, `opencode`) are
//!    [`DirectoryAdapter`] values built from an [`AdapterDefinition`].
//!
//! 2. **The generic adapter** writes a single aggregate `COUNCIL.md` and is
//!    the fallback when no tool is detected.
//!
//! New tools are added by registering another adapter with the
//! [`AdapterRegistry`]; reconciliation never names a specific tool.

pub mod adapter;
pub mod claude;
pub mod codex;
pub mod directory;
pub mod error;
pub mod gemini;
pub mod generic;
pub mod marker;
pub mod opencode;
pub mod registry;
pub mod review;
pub mod templates;

pub use adapter::{Adapter, CommandKind, CommandTemplate, Layout, PathSet, TemplateSet};
pub use claude::claude_adapter;
pub use codex::codex_adapter;
pub use directory::{AdapterDefinition, AgentStyle, CommandFormat, DirectoryAdapter};
pub use error::{Error, Result};
pub use gemini::gemini_adapter;
pub use generic::GenericAdapter;
pub use opencode::opencode_adapter;
pub use registry::{AdapterRegistry, builtin_adapters};
pub use review::render_review;
