//! Backend integration layer: wire format and HTTP transport for the helpdesk function.

pub mod client;
pub mod dispatcher;
pub mod wire;

/// Returns the backend module name for smoke checks.
pub fn module_name() -> &'static str {
    "backend"
}
