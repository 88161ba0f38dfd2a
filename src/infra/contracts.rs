use anyhow::Result;

/// Hands a URI (`tel:`, `mailto:`, `https:`) to the operating system.
pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}
