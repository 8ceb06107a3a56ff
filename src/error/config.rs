use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot start without it. Check the `.env` file or the process
    /// environment.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Bot token is too short to be a Discord token.
    ///
    /// Raised before any connection attempt. Real validation happens when the
    /// gateway authenticates the token.
    #[error("Missing/invalid token: expected at least {min_len} characters, got {len}")]
    InvalidToken {
        /// Length of the provided token
        len: usize,
        /// Minimum accepted length
        min_len: usize,
    },
}
