//! Post Repository
//!
//! Immutable, pre-loaded post collection embedded at compile time.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Post;

const EMBEDDED_POSTS: &str = include_str!("../assets/posts.json");

/// Read-only post collection, cheap to clone
#[derive(Debug, Clone, PartialEq)]
pub struct PostRepository {
    posts: Arc<[Post]>,
}

impl Default for PostRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts: posts.into() }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let posts: Vec<Post> = serde_json::from_str(raw)?;
        Ok(Self::new(posts))
    }

    /// Embedded posts, or an empty repository if the data does not decode
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_POSTS) {
            Ok(repo) if repo.is_empty() => {
                log::warn!("[POSTS] Post data is empty");
                repo
            }
            Ok(repo) => {
                log::info!("[POSTS] Loaded {} posts", repo.len());
                repo
            }
            Err(e) => {
                log::error!("[POSTS] {}; showing no posts", e);
                Self::default()
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
