//! Read-only store over the pre-generated posts JSON snapshot.
//!
//! The snapshot is produced by an external preprocessing job and is already
//! sorted newest-first by timestamp; the store never re-sorts or mutates it.
//! It is loaded once at startup and only invalidated by restarting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::feed::paginate::{paginate, Page};

/// One externally-authored content item from the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Seconds since epoch; defines the newest-first order of the snapshot.
    pub timestamp: i64,
    pub date: String,
    pub text: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Load the snapshot, degrading to an empty store when the file is
    /// missing or malformed. Callers cannot distinguish "no posts" from
    /// "load failed" beyond the log line; the site stays navigable either way.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(store) => {
                tracing::info!("Loaded {} posts from {}", store.len(), path.display());
                store
            }
            Err(e) => {
                tracing::error!("{}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        let posts: Vec<Post> = serde_json::from_str(&raw)
            .map_err(|e| AppError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self { posts })
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Store-level paged fetch, used when no search term is active.
    pub fn page(&self, requested_page: i64, page_size: usize) -> Page<Post> {
        paginate(&self.posts, page_size, requested_page)
    }

    /// Adjacent posts in snapshot order: `(newer, older)`.
    pub fn neighbors(&self, id: &str) -> (Option<&Post>, Option<&Post>) {
        let Some(index) = self.posts.iter().position(|p| p.id == id) else {
            return (None, None);
        };
        let newer = index.checked_sub(1).and_then(|i| self.posts.get(i));
        let older = self.posts.get(index + 1);
        (newer, older)
    }

    /// Most recent posts excluding `id`, for the related-posts strip.
    pub fn related(&self, id: &str, count: usize) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.id != id)
            .take(count)
            .collect()
    }
}
