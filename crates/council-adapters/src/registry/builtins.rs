//! Built-in adapters

use crate::adapter::Adapter;
use crate::generic::GenericAdapter;
use crate::{claude, codex, gemini, opencode};

/// Returns every built-in adapter, the generic fallback included.
pub fn builtin_adapters() -> Vec<Box<dyn Adapter>> {
    vec![
        Box::new(claude::claude_adapter()),
        Box::new(codex::codex_adapter()),
        Box::new(gemini::gemini_adapter()),
        Box::new(GenericAdapter::new()),
        Box::new(opencode::opencode_adapter()),
    ]
}
