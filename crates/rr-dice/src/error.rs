//! Error types for the dice engine.

/// Errors that can occur while acquiring entropy or rolling dice.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// The remote entropy service could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote entropy service answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The remote entropy service answered with an unusable body.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// A reroll addressed a position outside the result sequence.
    #[error("index {index} out of range for {sequence} sequence of length {len}")]
    IndexOutOfRange {
        /// The sequence that was addressed.
        sequence: String,
        /// The requested position.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },

    /// A face label could not be parsed.
    #[error("invalid face label: {0}")]
    InvalidLabel(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
