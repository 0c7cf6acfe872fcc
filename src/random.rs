//! Random engine - unbiased integers and shuffles from a secure source.

use rand::{CryptoRng, RngCore};
use thiserror::Error;

/// Size of the space a single 32-bit draw covers.
const DRAW_SPACE: u64 = 1 << 32;

#[derive(Error, Debug)]
pub enum RandomError {
    #[error("Secure random source failed: {0}")]
    Source(#[from] rand::Error),
    #[error("Bound {0} exceeds the 32-bit sampling range")]
    BoundTooLarge(usize),
}

/// Default cryptographically secure RNG.
pub fn csprng() -> rand::rngs::OsRng {
    rand::rngs::OsRng
}

/// Draws one 32-bit word, propagating source failures.
fn draw_u32<R>(rng: &mut R) -> Result<u32, RandomError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = [0u8; 4];
    if let Err(e) = rng.try_fill_bytes(&mut buf) {
        #[cfg(feature = "tracing")]
        tracing::error!("Secure random source failed: {}", e);
        return Err(RandomError::Source(e));
    }
    Ok(u32::from_le_bytes(buf))
}

/// Returns a uniformly distributed integer in `[0, bound)`.
///
/// Draws above the largest multiple of `bound` that fits in 32 bits are
/// rejected and redrawn, so the result carries no modulo bias.
///
/// A `bound` of zero returns `0` without touching the source.
///
/// # Errors
///
/// Returns error if:
/// - The random source fails to produce bytes
/// - `bound` is larger than `2^32`
pub fn secure_random_int<R>(rng: &mut R, bound: usize) -> Result<usize, RandomError>
where
    R: RngCore + CryptoRng,
{
    if bound == 0 {
        return Ok(0);
    }
    let wide = bound as u64;
    if wide > DRAW_SPACE {
        return Err(RandomError::BoundTooLarge(bound));
    }

    let limit = (DRAW_SPACE / wide) * wide;
    loop {
        let value = draw_u32(rng)? as u64;
        if value < limit {
            return Ok((value % wide) as usize);
        }
    }
}

/// Shuffles `items` in place with Fisher-Yates, every swap index drawn
/// through [`secure_random_int`].
pub fn secure_shuffle<R, T>(rng: &mut R, items: &mut [T]) -> Result<(), RandomError>
where
    R: RngCore + CryptoRng,
{
    for i in (1..items.len()).rev() {
        let j = secure_random_int(rng, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
