//! Entropy acquisition: uniform draws in [0, 1).
//!
//! A draw comes either from the local pseudo-random generator or from a
//! remote randomness service. Networked requests are wrapped in a
//! [`Fallback`] so that any failure of the remote batch is replaced by a
//! full local batch; callers always get exactly the quantity they asked for.

pub mod fallback;
pub mod local;
pub mod remote;

pub use fallback::Fallback;
pub use local::LocalSource;
pub use remote::{Fetch, HttpFetch, RemoteConfig, RemoteSource};

use serde::{Deserialize, Serialize};

use crate::error::DiceResult;

/// A uniform random value in the half-open interval [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Draw(f64);

impl Draw {
    /// The smallest draw.
    pub const ZERO: Self = Self(0.0);

    /// The largest draw, the greatest `f64` below 1.0.
    pub const MAX: Self = Self(1.0 - f64::EPSILON / 2.0);

    /// Wrap a value, rejecting anything outside [0, 1).
    pub fn new(value: f64) -> Option<Self> {
        (0.0..1.0).contains(&value).then_some(Self(value))
    }

    /// Normalize an integer from `[0, max]` by dividing by `max`.
    ///
    /// `max` itself would normalize to exactly 1.0 and is pinned to
    /// [`Draw::MAX`] instead, landing on the last slot of any table.
    pub fn from_integer(value: u32, max: u32) -> Option<Self> {
        if max == 0 || value > max {
            return None;
        }
        let normalized = f64::from(value) / f64::from(max);
        Some(Self(normalized.min(Self::MAX.0)))
    }

    /// The wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Where draws should come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropyMode {
    /// The in-process pseudo-random generator.
    #[default]
    Local,
    /// The remote randomness service, falling back to local on failure.
    Networked,
}

impl EntropyMode {
    /// `Networked` when `online` is set, `Local` otherwise.
    pub fn from_online(online: bool) -> Self {
        if online { Self::Networked } else { Self::Local }
    }
}

impl std::fmt::Display for EntropyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Networked => write!(f, "networked"),
        }
    }
}

/// A source of draws.
///
/// Implementations return exactly `quantity` draws in source order, or an
/// error for the whole batch.
pub trait EntropySource {
    /// Produce `quantity` draws.
    fn draws(&mut self, quantity: usize) -> impl Future<Output = DiceResult<Vec<Draw>>>;
}

/// Picks the entropy source for each request.
///
/// Local requests and empty requests never touch the network. Networked
/// requests go through the [`Fallback`] and cannot fail.
#[derive(Debug)]
pub struct EntropySelector<P = RemoteSource> {
    fallback: Fallback<P>,
}

impl EntropySelector {
    /// A selector that talks to the configured remote service over HTTP.
    pub fn remote(config: RemoteConfig, local: LocalSource) -> Self {
        Self::new(Fallback::new(RemoteSource::new(config), local))
    }
}

impl Default for EntropySelector {
    fn default() -> Self {
        Self::remote(RemoteConfig::default(), LocalSource::default())
    }
}

impl<P> EntropySelector<P> {
    /// Wrap an existing fallback chain.
    pub fn new(fallback: Fallback<P>) -> Self {
        Self { fallback }
    }

    /// The primary source behind the fallback.
    pub fn primary(&self) -> &P {
        self.fallback.primary()
    }
}

impl<P: EntropySource> EntropySelector<P> {
    /// Acquire `quantity` draws in the given mode.
    pub async fn get_draws(&mut self, quantity: usize, mode: EntropyMode) -> Vec<Draw> {
        if quantity == 0 || mode == EntropyMode::Local {
            return self.fallback.local_mut().generate(quantity);
        }
        self.fallback.acquire(quantity).await
    }

    /// Acquire a single draw in the given mode.
    pub async fn get_draw(&mut self, mode: EntropyMode) -> Draw {
        // get_draws always returns exactly the requested quantity
        self.get_draws(1, mode).await.remove(0)
    }
}
