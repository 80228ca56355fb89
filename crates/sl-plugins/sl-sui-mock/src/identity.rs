//! Random placeholder addresses in the `0x1a2b3c4d...5e6f` display form.

use sl_core::traits::IdentityProvider;

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdentity;

impl IdentityProvider for RandomIdentity {
    /// `0x` + 8 hex chars + `...` + 4 hex chars, from the OS RNG.
    fn generate_address(&self) -> anyhow::Result<String> {
        let mut bytes = [0u8; 6];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| anyhow::anyhow!("no entropy available: {}", e))?;
        let hex = hex::encode(bytes);
        Ok(format!("0x{}...{}", &hex[..8], &hex[8..]))
    }
}
