use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or advancing a simulation.
///
/// Physics errors are precondition violations: a scenario whose bodies end up
/// on top of each other, or whose state leaves the finite domain, is not
/// recoverable and is reported to the caller instead of being clamped.
#[derive(Debug, Error)]
pub enum Error {
    /// Force requested between two bodies at the same position.
    #[error("zero separation between bodies")]
    ZeroSeparation,

    /// Two bodies share a position, so the force between them is undefined.
    #[error("bodies {a} and {b} are coincident (zero separation)")]
    CoincidentBodies { a: usize, b: usize },

    /// A body descriptor failed validation.
    #[error("invalid body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    /// Invalid physical or display parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// More than one body flagged as the star.
    #[error("bodies {first} and {second} are both flagged as the star")]
    MultipleStars { first: usize, second: usize },

    /// A step produced NaN or infinite state.
    #[error("body {index} left the finite domain")]
    NonFinite { index: usize },

    /// Malformed scenario file.
    #[error("scenario config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
