//! Dice engine for ring and skill dice.
//!
//! Draws uniform values in [0, 1) from a remote randomness service or a
//! local generator, maps each draw onto a weighted die face, and keeps the
//! primary and bonus result sequences a table needs for rerolls.

pub mod dice;
pub mod entropy;
pub mod error;
pub mod roller;

pub use dice::{DieType, FaceLabel, resolve_face};
pub use entropy::{
    Draw, EntropyMode, EntropySelector, EntropySource, Fallback, Fetch, HttpFetch, LocalSource,
    RemoteConfig, RemoteSource,
};
pub use error::{DiceError, DiceResult};
pub use roller::{RollRequest, RollResult, Roller, Sequence};
