//! Reqwest-backed implementation of the remote feed contract.

use serde_json::json;

use crate::api::models::{DeletedPost, Post, PostId, PostPage, User, UserId};
use crate::api::RemoteFeed;
use crate::error::FeedError;
use crate::loading::LoadingIndicator;

/// HTTP client for the remote feed API.
///
/// Every operation brackets its round-trip with the loading indicator's
/// show/hide pair. When a call fails the hide is skipped and the error
/// propagates to the caller untouched, matching the rest of the error
/// policy (no retry, no rollback).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    loading: LoadingIndicator,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, loading: LoadingIndicator) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            loading,
        }
    }
}

impl RemoteFeed for ApiClient {
    async fn fetch_user(&self, user_id: UserId) -> Result<User, FeedError> {
        self.loading.show_loading();
        let url = format!("{}/users/{}", self.base_url, user_id);
        tracing::debug!("GET {url}");
        let user = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<User>()
            .await?;
        self.loading.hide_loading();
        Ok(user)
    }

    async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, FeedError> {
        self.loading.show_loading();
        let url = format!("{}/posts", self.base_url);
        tracing::debug!("GET {url}?limit={limit}");
        let page = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json::<PostPage>()
            .await?;
        self.loading.hide_loading();

        // The remote caps the page itself; do not rely on it.
        let mut posts = page.posts;
        posts.truncate(limit);
        Ok(posts)
    }

    async fn delete_post(&self, post_id: PostId) -> Result<DeletedPost, FeedError> {
        self.loading.show_loading();
        let url = format!("{}/posts/{}", self.base_url, post_id);
        tracing::debug!("DELETE {url}");
        let receipt = self
            .http
            .delete(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<DeletedPost>()
            .await?;
        self.loading.hide_loading();
        Ok(receipt)
    }

    async fn update_post(
        &self,
        post_id: PostId,
        title: &str,
        body: &str,
    ) -> Result<Post, FeedError> {
        self.loading.show_loading();
        let url = format!("{}/posts/{}", self.base_url, post_id);
        tracing::debug!("PUT {url}");
        let updated = self
            .http
            .put(&url)
            .json(&json!({ "title": title, "body": body }))
            .send()
            .await?
            .error_for_status()?
            .json::<Post>()
            .await?;
        self.loading.hide_loading();
        Ok(updated)
    }

    async fn create_post(
        &self,
        _user_id: UserId,
        _title: &str,
        _body: &str,
    ) -> Result<Post, FeedError> {
        Err(FeedError::CreateUnimplemented)
    }
}
