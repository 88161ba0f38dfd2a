use anyhow::{Context, Result};

use crate::infra::contracts::ExternalOpener;

/// Opens URIs with the platform default handler.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        tracing::info!(target_uri = target, "opening external target");
        open::that_detached(target).with_context(|| format!("failed to open {target}"))
    }
}
