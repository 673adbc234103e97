//! Error taxonomy for the feed client.
//!
//! Two failure classes exist: remote calls that fail on the wire (or come
//! back non-2xx), and view preconditions that the caller violated. Everything
//! else in the binary flows through `anyhow` at the boundary.

use thiserror::Error;

use crate::api::models::PostId;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure or non-2xx response from the remote API.
    #[error("remote call failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A view operation referenced a post id that is not on screen.
    /// This is a precondition violation, not a recoverable state.
    #[error("post {0} is not rendered")]
    PostNotRendered(PostId),

    /// Post creation is declared for extensibility but not implemented.
    #[error("post creation is not implemented")]
    CreateUnimplemented,
}
