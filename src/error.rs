//! Error types for montpow

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The modulus is outside the supported domain.
    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),
}
