//! Randomness capability consumed by the door picker and the host.
//!
//! Callers inject any [`DoorRng`]: every `rand` generator qualifies through
//! the blanket impl over [`TryRngCore`], including the fallible [`OsRng`].
//! [`DoorSource`] bundles the two sources the crate builds itself: the
//! operating-system CSPRNG and a seeded ChaCha20 stream for reproducible runs.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng, TryRngCore};
use rand_chacha::ChaCha20Rng;

use crate::config::RngConfig;
use crate::errors::DoorError;

/// A source of uniform indices that may fail.
pub trait DoorRng {
    /// Returns an index drawn uniformly from `0..bound`.
    ///
    /// `bound` must be non-zero.
    fn try_index(&mut self, bound: u32) -> Result<u32, DoorError>;
}

impl<R: TryRngCore> DoorRng for R {
    fn try_index(&mut self, bound: u32) -> Result<u32, DoorError> {
        uniform_below(|| self.try_next_u32(), bound).map_err(|e| {
            tracing::error!(error = %e, "randomness source failed");
            DoorError::Entropy(e.to_string())
        })
    }
}

/// Rejection sampling over 32-bit draws, keeping only the largest prefix of
/// the range that `bound` divides evenly.
fn uniform_below<E>(mut next: impl FnMut() -> Result<u32, E>, bound: u32) -> Result<u32, E> {
    debug_assert!(bound > 0, "bound must be non-zero");
    let limit = u32::MAX - (u32::MAX % bound);
    loop {
        let v = next()?;
        if v < limit {
            return Ok(v % bound);
        }
    }
}

/// The randomness sources the crate can construct on its own.
#[derive(Debug)]
pub enum DoorSource {
    /// Operating-system CSPRNG
    Os(OsRng),
    /// Reproducible ChaCha20 stream
    Seeded { seed: u64, rng: ChaCha20Rng },
}

impl DoorSource {
    pub fn os() -> Self {
        DoorSource::Os(OsRng)
    }

    pub fn seeded(seed: u64) -> Self {
        DoorSource::Seeded {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Builds the source a resolved configuration asks for.
    ///
    /// ```
    /// use montyhall_engine::config::RngConfig;
    /// use montyhall_engine::DoorSource;
    ///
    /// let src = DoorSource::from_config(&RngConfig { seed: Some(7) });
    /// assert_eq!(src.seed(), Some(7));
    /// assert_eq!(DoorSource::from_config(&RngConfig::default()).seed(), None);
    /// ```
    pub fn from_config(cfg: &RngConfig) -> Self {
        match cfg.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::os(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            DoorSource::Os(_) => None,
            DoorSource::Seeded { seed, .. } => Some(*seed),
        }
    }
}

impl Default for DoorSource {
    fn default() -> Self {
        Self::os()
    }
}

impl DoorRng for DoorSource {
    fn try_index(&mut self, bound: u32) -> Result<u32, DoorError> {
        match self {
            DoorSource::Os(os) => os.try_index(bound),
            DoorSource::Seeded { rng, .. } => {
                uniform_below(|| Ok::<_, DoorError>(rng.next_u32()), bound)
            }
        }
    }
}
