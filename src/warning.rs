// File: src/warning.rs
// Purpose: Non-fatal developer diagnostics

/// Emit a developer warning when `valid` is false.
///
/// Diagnostic only: never panics and never halts rendering.
pub fn warning(valid: bool, component: &str, message: &str) {
    if !valid {
        tracing::warn!(component, "{message}");
    }
}
