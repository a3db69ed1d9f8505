// src/exit.rs
//! Standardized process exit codes for `friendrec`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RecommendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FriendrecExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, malformed edge list).
    Error = 1,
    /// Query input was rejected (unknown user, bad strategy/method, bad top-k, bad config).
    InvalidInput = 2,
    /// No usable graph could be loaded.
    GraphUnavailable = 3,
}

impl FriendrecExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an error to the exit code a script should see.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RecommendError>() {
            Some(RecommendError::GraphNotAvailable { .. }) => Self::GraphUnavailable,
            Some(
                RecommendError::UnknownNode(_)
                | RecommendError::UnsupportedStrategy(_)
                | RecommendError::UnsupportedMethod(_)
                | RecommendError::InvalidTopK
                | RecommendError::InvalidConfig { .. },
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for FriendrecExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
