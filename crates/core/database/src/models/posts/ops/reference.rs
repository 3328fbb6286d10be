use litterless_result::Result;

use crate::Post;
use crate::ReferenceDb;

use super::AbstractPosts;

#[async_trait]
impl AbstractPosts for ReferenceDb {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.lock().await;
        if posts.contains_key(&post.id) {
            Err(create_database_error!("insert", "posts"))
        } else {
            posts.insert(post.id.clone(), post.clone());
            Ok(())
        }
    }

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post> {
        let posts = self.posts.lock().await;
        posts
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownPost))
    }

    /// Fetch one page of posts, newest first
    async fn fetch_posts_page(&self, page: i64, limit: i64) -> Result<Vec<Post>> {
        let posts = self.posts.lock().await;

        let mut posts: Vec<Post> = posts.values().cloned().collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));

        let skip = ((page.max(1) - 1) * limit) as usize;
        Ok(posts.into_iter().skip(skip).take(limit as usize).collect())
    }
}
