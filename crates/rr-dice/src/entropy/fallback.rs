//! Local fallback for a fallible entropy source.

use super::{Draw, EntropySource, LocalSource};
use crate::error::DiceResult;

/// Tries a primary source and replaces the whole batch with local draws when
/// it fails.
///
/// There is no retry and no partial success: a failed or short batch is
/// discarded and `quantity` local draws are returned instead. The failure is
/// neither returned nor logged.
#[derive(Debug, Clone)]
pub struct Fallback<P> {
    primary: P,
    local: LocalSource,
}

impl<P> Fallback<P> {
    /// Wrap `primary` with `local` as the backup.
    pub fn new(primary: P, local: LocalSource) -> Self {
        Self { primary, local }
    }

    /// The wrapped primary source.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The backup generator, also used directly for local requests.
    pub fn local_mut(&mut self) -> &mut LocalSource {
        &mut self.local
    }
}

impl<P: EntropySource> Fallback<P> {
    /// Acquire `quantity` draws, never failing.
    pub async fn acquire(&mut self, quantity: usize) -> Vec<Draw> {
        match self.primary.draws(quantity).await {
            Ok(draws) if draws.len() == quantity => draws,
            _ => self.local.generate(quantity),
        }
    }
}

impl<P: EntropySource> EntropySource for Fallback<P> {
    async fn draws(&mut self, quantity: usize) -> DiceResult<Vec<Draw>> {
        Ok(self.acquire(quantity).await)
    }
}
