//! Error types for the FAQ bot.
//!
//! `AppError` is the top-level error. It wraps configuration and menu diagnostics
//! and classifies Discord HTTP failures so callers can tell a permission denial or
//! a missing resource apart from other transport errors.

pub mod config;
pub mod menu;

use serenity::http::HttpError;
use thiserror::Error;

use crate::error::{config::ConfigError, menu::MenuError};

const HTTP_FORBIDDEN: u16 = 403;
const HTTP_NOT_FOUND: u16 = 404;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal: the process stops before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Menu reconciliation could not complete for this session.
    #[error(transparent)]
    MenuErr(#[from] MenuError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Discord answered 403 Forbidden.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Discord answered 404 Not Found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AppError::Forbidden(_))
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Unsuccessful HTTP responses with status 403 or 404 map to `Forbidden` and
/// `NotFound`. Everything else is boxed to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(http_err) = &err {
            if let Some(classified) = classify_http_error(http_err) {
                return classified;
            }
        }

        AppError::DiscordErr(Box::new(err))
    }
}

fn classify_http_error(err: &HttpError) -> Option<AppError> {
    let HttpError::UnsuccessfulRequest(response) = err else {
        return None;
    };

    match response.status_code.as_u16() {
        HTTP_FORBIDDEN => Some(AppError::Forbidden(response.error.message.clone())),
        HTTP_NOT_FOUND => Some(AppError::NotFound(response.error.message.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the forbidden check.
    ///
    /// Expected: true only for `Forbidden`
    #[test]
    fn is_forbidden_matches_only_forbidden() {
        assert!(AppError::Forbidden("Missing Permissions".to_string()).is_forbidden());
        assert!(!AppError::NotFound("Unknown Message".to_string()).is_forbidden());
        assert!(!AppError::from(serenity::Error::Other("boom")).is_forbidden());
    }

    /// Tests that non-HTTP serenity errors are boxed.
    ///
    /// Expected: AppError::DiscordErr
    #[test]
    fn non_http_errors_are_boxed() {
        let err = AppError::from(serenity::Error::Other("gateway closed"));

        assert!(matches!(err, AppError::DiscordErr(_)));
    }
}
