//! Deterministic seeds for period-based variety sampling.

use sha2::{Digest, Sha256};

use crate::domain::foundation::{Category, Period};

const SEED_DOMAIN: &str = "household-balance/sampler/v1";

/// Seed for the variety picks of `category` in `period`.
///
/// First eight bytes of `SHA-256(domain | period label | category)`, so the
/// same period always yields the same seed on every platform.
pub fn variety_seed(period: Period, category: Category) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN.as_bytes());
    hasher.update(b"|");
    hasher.update(period.label().as_bytes());
    hasher.update(b"|");
    hasher.update(category.display_name().as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
