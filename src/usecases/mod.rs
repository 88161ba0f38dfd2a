//! Use case layer: application workflows and orchestration.

pub mod ask;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod exchange;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
