// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rill workspace.
//!
//! A single root [`RillError`] covers every failure mode a stream can carry.
//! Errors travel in-band as [`StreamItem::Error`](crate::StreamItem::Error)
//! and are intercepted at the collection boundary, so most user code never
//! constructs them directly.

/// Root error type for all rill operations.
#[derive(Debug, thiserror::Error)]
pub enum RillError {
    /// Stream processing encountered an error.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided callbacks so they can be
    /// propagated through a stream.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RillError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized `Result` type for rill operations.
pub type Result<T> = std::result::Result<T, RillError>;

impl Clone for RillError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed error is not cloneable, so fall back to its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}
