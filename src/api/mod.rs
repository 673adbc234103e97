//! Remote data client for the feed API.
//!
//! The `RemoteFeed` trait is the seam the orchestrator programs against;
//! `ApiClient` is the reqwest-backed production implementation and
//! `MockRemote` the canned-fixture implementation used by tests.

pub mod client;
pub mod mock;
pub mod models;

pub use client::ApiClient;
pub use mock::{MockRemote, RemoteCall};
pub use models::{DeletedPost, Post, PostId, PostPage, User, UserId};

use crate::error::FeedError;

/// The four remote operations the client needs, plus the declared create
/// stub. Every call suspends the caller until the round-trip completes.
#[allow(async_fn_in_trait)]
pub trait RemoteFeed {
    /// Fetch one user profile by id.
    async fn fetch_user(&self, user_id: UserId) -> Result<User, FeedError>;

    /// Fetch at most `limit` posts, in remote order.
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, FeedError>;

    /// Delete a post by id and return the remote's receipt.
    async fn delete_post(&self, post_id: PostId) -> Result<DeletedPost, FeedError>;

    /// Replace a post's title and body. The author id is not transmitted.
    async fn update_post(&self, post_id: PostId, title: &str, body: &str)
        -> Result<Post, FeedError>;

    /// Declared for extensibility; yields `FeedError::CreateUnimplemented`.
    async fn create_post(&self, user_id: UserId, title: &str, body: &str)
        -> Result<Post, FeedError>;
}
