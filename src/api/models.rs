//! Wire model for the remote feed API.
//!
//! The remote speaks camelCase JSON and decorates resources with fields we
//! never use (tags, reactions, address blocks and so on); serde drops those
//! on the floor. Nothing here is persisted or mutated locally.

use serde::Deserialize;

pub type UserId = u64;
pub type PostId = u64;

/// A user profile as served by `GET /users/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Avatar image URL.
    pub image: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A post as served inside `GET /posts` and echoed by the mutating calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// Id of the authoring user.
    pub user_id: UserId,
}

/// Collection envelope returned by `GET /posts?limit={n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Echo returned by `DELETE /posts/{id}`. The remote is a mock and does not
/// durably delete anything; the receipt is all the caller gets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedPost {
    #[serde(flatten)]
    pub post: Post,
    pub is_deleted: bool,
    pub deleted_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_remote_shape() {
        let json = r#"{
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
            "maidenName": "Smith",
            "age": 28,
            "image": "https://dummyjson.com/icon/emilys/128"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "Emily");
        assert_eq!(user.last_name, "Johnson");
        assert_eq!(user.full_name(), "Emily Johnson");
        assert_eq!(user.image, "https://dummyjson.com/icon/emilys/128");
    }

    #[test]
    fn post_page_preserves_remote_order() {
        let json = r#"{
            "posts": [
                {"id": 3, "title": "third", "body": "c", "userId": 9, "tags": ["x"]},
                {"id": 1, "title": "first", "body": "a", "userId": 7},
                {"id": 2, "title": "second", "body": "b", "userId": 8}
            ],
            "total": 251,
            "skip": 0,
            "limit": 3
        }"#;

        let page: PostPage = serde_json::from_str(json).unwrap();
        let ids: Vec<PostId> = page.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(page.total, 251);
    }

    #[test]
    fn deleted_post_echo_carries_receipt_fields() {
        let json = r#"{
            "id": 5,
            "title": "gone",
            "body": "soon",
            "userId": 2,
            "reactions": {"likes": 1, "dislikes": 0},
            "isDeleted": true,
            "deletedOn": "2024-06-10T12:00:00.000Z"
        }"#;

        let deleted: DeletedPost = serde_json::from_str(json).unwrap();
        assert_eq!(deleted.post.id, 5);
        assert!(deleted.is_deleted);
        assert!(deleted.deleted_on.starts_with("2024"));
    }
}
