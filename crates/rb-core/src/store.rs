//! # Content Store
//!
//! Holds posts (newest first) and their comments (oldest first).
//! Every write validates before touching the sequence, so a failed
//! `create_post`/`add_comment` leaves the store exactly as it was.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Comment, Post, Session};

/// Posts every fresh instance shows on its home page, in display order.
pub const SEED_POSTS: [(&str, &str); 2] = [
    ("First Blog Post", "Welcome to the blog! This is the very first post."),
    ("Another Post", "More thoughts, shared a little later."),
];

#[derive(Debug, Default, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
}

fn require_text(value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::EmptyField(field));
    }
    Ok(())
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with [`SEED_POSTS`].
    pub fn seeded() -> Self {
        let mut store = Self::new();
        // Prepending reverses order, so insert the oldest first.
        for (title, content) in SEED_POSTS.iter().rev() {
            store.insert_post(title, content);
        }
        store
    }

    /// Newest first.
    pub fn list_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_post(&self, post_id: Uuid) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| not_found(post_id))
    }

    /// Creates a post and makes it the new head of the list.
    pub fn create_post(&mut self, session: &Session, title: &str, content: &str) -> Result<&Post> {
        if !session.is_authenticated() {
            return Err(AppError::Unauthorized(
                "log in to create a post".to_string(),
            ));
        }
        require_text(title, "title")?;
        require_text(content, "content")?;

        let post = self.insert_post(title, content);
        info!(post_id = %post.id, title = %post.title, "post created");
        Ok(post)
    }

    /// Appends a comment. No session is required.
    pub fn add_comment(&mut self, post_id: Uuid, author: &str, text: &str) -> Result<&Comment> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| not_found(post_id))?;
        require_text(text, "comment text")?;

        post.comments.push(Comment {
            id: Uuid::now_v7(),
            author: author.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        });
        debug!(%post_id, author, "comment added");

        // Just pushed, so the sequence is non-empty.
        Ok(&post.comments[post.comments.len() - 1])
    }

    fn insert_post(&mut self, title: &str, content: &str) -> &Post {
        self.posts.insert(
            0,
            Post {
                id: Uuid::now_v7(),
                title: title.to_string(),
                content: content.to_string(),
                created_at: Utc::now(),
                comments: Vec::new(),
            },
        );
        &self.posts[0]
    }
}

fn not_found(post_id: Uuid) -> AppError {
    AppError::NotFound("Post".to_string(), post_id.to_string())
}

/// A [`ContentStore`] shared between several sessions.
///
/// Writes are serialized under one lock, which also keeps post creation
/// order-preserving. Reads hand out owned snapshots so no lock outlives the
/// call.
#[derive(Debug, Clone, Default)]
pub struct SharedContentStore {
    inner: Arc<RwLock<ContentStore>>,
}

impl SharedContentStore {
    pub fn new(store: ContentStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn list_posts(&self) -> Vec<Post> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        store.list_posts().to_vec()
    }

    pub fn get_post(&self, post_id: Uuid) -> Result<Post> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        store.get_post(post_id).cloned()
    }

    pub fn create_post(&self, session: &Session, title: &str, content: &str) -> Result<Post> {
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        store.create_post(session, title, content).cloned()
    }

    pub fn add_comment(&self, post_id: Uuid, author: &str, text: &str) -> Result<Comment> {
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        store.add_comment(post_id, author, text).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn admin() -> Session {
        Session::LoggedIn {
            user: "admin".to_string(),
        }
    }

    #[test]
    fn seeded_order_matches_home_page() {
        let store = ContentStore::seeded();
        let titles: Vec<&str> = store.list_posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First Blog Post", "Another Post"]);
    }

    #[test]
    fn new_post_becomes_head() {
        let mut store = ContentStore::seeded();
        store
            .create_post(&admin(), "My New Post", "This is the content of the new post.")
            .unwrap();
        assert_eq!(store.list_posts()[0].title, "My New Post");
        assert_eq!(store.list_posts().len(), 3);
    }

    #[test]
    fn create_post_requires_login() {
        let mut store = ContentStore::seeded();
        let before = store.list_posts().to_vec();

        let err = store
            .create_post(&Session::LoggedOut, "My New Post", "content")
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        assert_eq!(store.list_posts(), before.as_slice());
    }

    #[test]
    fn create_post_rejects_blank_fields() {
        let mut store = ContentStore::new();
        assert_eq!(
            store.create_post(&admin(), "", "content").unwrap_err(),
            AppError::EmptyField("title")
        );
        assert_eq!(
            store.create_post(&admin(), "title", "").unwrap_err(),
            AppError::EmptyField("content")
        );
        assert!(store.list_posts().is_empty());
    }

    #[test]
    fn whitespace_is_not_empty() {
        let mut store = ContentStore::new();
        let post = store.create_post(&admin(), " ", "body").unwrap();
        assert_eq!(post.title, " ");

        let id = store.list_posts()[0].id;
        assert_eq!(store.add_comment(id, "Guest", "  ").unwrap().text, "  ");
    }

    #[test]
    fn comments_keep_insertion_order() {
        let mut store = ContentStore::seeded();
        let id = store.list_posts()[0].id;
        store.add_comment(id, "Guest", "first").unwrap();
        store.add_comment(id, "admin", "second").unwrap();

        let texts: Vec<&str> = store
            .get_post(id)
            .unwrap()
            .comments
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn comment_renders_author_prefix() {
        let mut store = ContentStore::seeded();
        let id = store.list_posts()[0].id;
        let comment = store.add_comment(id, "Guest", "This is a test comment.").unwrap();

        let rendered = comment.to_string();
        assert_eq!(rendered, "Guest: This is a test comment.");
        assert_eq!(rendered.split(':').nth(1).unwrap().trim(), "This is a test comment.");
    }

    #[test]
    fn comment_on_missing_post() {
        let mut store = ContentStore::seeded();
        let missing = Uuid::now_v7();
        let err = store.add_comment(missing, "Guest", "hello").unwrap_err();
        assert_eq!(err, AppError::NotFound("Post".into(), missing.to_string()));
        assert!(store.get_post(missing).is_err());
    }

    #[test]
    fn blank_comment_is_a_no_op() {
        let mut store = ContentStore::seeded();
        let id = store.list_posts()[0].id;
        assert_eq!(
            store.add_comment(id, "Guest", "").unwrap_err(),
            AppError::EmptyField("comment text")
        );
        assert!(store.get_post(id).unwrap().comments.is_empty());
    }

    #[test]
    fn posts_serialize_with_comments() {
        let mut store = ContentStore::seeded();
        let id = store.list_posts()[1].id;
        store.add_comment(id, "Guest", "hi").unwrap();

        let json = serde_json::to_value(store.list_posts()).unwrap();
        assert_eq!(json[1]["title"], "Another Post");
        assert_eq!(json[1]["comments"][0]["author"], "Guest");
    }

    #[test]
    fn shared_store_serializes_concurrent_writers() {
        let shared = SharedContentStore::new(ContentStore::seeded());
        let post_id = shared.list_posts()[0].id;

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .add_comment(post_id, "Guest", &format!("comment {i}"))
                        .unwrap();
                    shared
                        .create_post(&admin(), &format!("post {i}"), "body")
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.list_posts().len(), 10);
        assert_eq!(shared.get_post(post_id).unwrap().comments.len(), 8);
    }
}
