// src/crypto.rs
use rand::{CryptoRng, RngCore};
use crate::models::SamplingMode;

// Turn random bytes into `count` indices below `pool_len`.
// `pool_len` must be in 1..=256 since one byte is drawn per index.
pub fn random_indices<R>(rng: &mut R, pool_len: usize, count: usize, mode: SamplingMode) -> Vec<usize>
where
    R: RngCore + CryptoRng,
{
    debug_assert!(pool_len > 0 && pool_len <= 256, "pool size must fit in a byte");

    match mode {
        SamplingMode::Modulo => {
            let mut bytes = vec![0u8; count];
            rng.fill_bytes(&mut bytes);
            bytes.iter().map(|b| *b as usize % pool_len).collect()
        }
        SamplingMode::Rejection => {
            // Largest multiple of pool_len that fits in 0..256
            let limit = 256 - (256 % pool_len);
            let mut indices = Vec::with_capacity(count);
            let mut buf = [0u8; 64];

            while indices.len() < count {
                rng.fill_bytes(&mut buf);
                for b in buf.iter().map(|b| *b as usize) {
                    if b < limit {
                        indices.push(b % pool_len);
                        if indices.len() == count {
                            break;
                        }
                    }
                }
            }

            indices
        }
    }
}
