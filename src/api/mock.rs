//! Canned-fixture implementation of the remote feed contract for testing.
//!
//! Records every call so tests can verify exactly which requests a flow
//! issued, in order, without touching the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::models::{DeletedPost, Post, PostId, User, UserId};
use crate::api::RemoteFeed;
use crate::error::FeedError;

/// One recorded remote call, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    FetchUser(UserId),
    FetchPosts(usize),
    DeletePost(PostId),
    UpdatePost {
        post_id: PostId,
        title: String,
        body: String,
    },
    CreatePost(UserId),
}

/// Type alias for the shared call log
type CallLog = Arc<Mutex<Vec<RemoteCall>>>;

/// Mock remote backed by in-memory fixtures.
#[derive(Default)]
pub struct MockRemote {
    users: HashMap<UserId, User>,
    posts: Vec<Post>,
    calls: CallLog,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user fixture, keyed by its id.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    /// Add a post fixture; posts are served in insertion order.
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    /// Snapshot of every call issued so far, in order.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().expect("call log lock").push(call);
    }
}

impl RemoteFeed for MockRemote {
    async fn fetch_user(&self, user_id: UserId) -> Result<User, FeedError> {
        self.record(RemoteCall::FetchUser(user_id));
        Ok(self
            .users
            .get(&user_id)
            .unwrap_or_else(|| panic!("no user fixture for id {user_id}"))
            .clone())
    }

    async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, FeedError> {
        self.record(RemoteCall::FetchPosts(limit));
        Ok(self.posts.iter().take(limit).cloned().collect())
    }

    async fn delete_post(&self, post_id: PostId) -> Result<DeletedPost, FeedError> {
        self.record(RemoteCall::DeletePost(post_id));
        let post = self
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .unwrap_or_else(|| panic!("no post fixture for id {post_id}"))
            .clone();
        Ok(DeletedPost {
            post,
            is_deleted: true,
            deleted_on: "2024-06-10T12:00:00.000Z".to_string(),
        })
    }

    async fn update_post(
        &self,
        post_id: PostId,
        title: &str,
        body: &str,
    ) -> Result<Post, FeedError> {
        self.record(RemoteCall::UpdatePost {
            post_id,
            title: title.to_string(),
            body: body.to_string(),
        });
        let user_id = self
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| p.user_id)
            .unwrap_or_else(|| panic!("no post fixture for id {post_id}"));
        Ok(Post {
            id: post_id,
            title: title.to_string(),
            body: body.to_string(),
            user_id,
        })
    }

    async fn create_post(
        &self,
        user_id: UserId,
        _title: &str,
        _body: &str,
    ) -> Result<Post, FeedError> {
        self.record(RemoteCall::CreatePost(user_id));
        Err(FeedError::CreateUnimplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: PostId, user_id: UserId) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
            user_id,
        }
    }

    #[tokio::test]
    async fn fetch_posts_respects_limit_and_order() {
        let remote = MockRemote::new()
            .with_post(post(10, 1))
            .with_post(post(11, 2))
            .with_post(post(12, 3));

        let posts = remote.fetch_posts(2).await.unwrap();
        let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 11]);
        assert_eq!(remote.calls(), vec![RemoteCall::FetchPosts(2)]);
    }

    #[tokio::test]
    async fn update_echoes_new_fields() {
        let remote = MockRemote::new().with_post(post(7, 4));

        let updated = remote.update_post(7, "Hello", "World").await.unwrap();
        assert_eq!(updated.title, "Hello");
        assert_eq!(updated.body, "World");
        assert_eq!(updated.user_id, 4);
    }
}
