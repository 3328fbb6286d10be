use litterless_result::Result;

use crate::Post;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractPosts: Sync + Send {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()>;

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post>;

    /// Fetch one page of posts, newest first
    ///
    /// Pages are 1-indexed; a page past the end is empty, not an error.
    async fn fetch_posts_page(&self, page: i64, limit: i64) -> Result<Vec<Post>>;
}
