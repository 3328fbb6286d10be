use litterless_result::Result;
use mongodb::bson::doc;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::Post;

use super::AbstractPosts;

static COL: &str = "posts";

#[async_trait]
impl AbstractPosts for MongoDb {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()> {
        query!(self, insert_one, COL, &post).map(|_| ())
    }

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownPost))
    }

    /// Fetch one page of posts, newest first
    async fn fetch_posts_page(&self, page: i64, limit: i64) -> Result<Vec<Post>> {
        let skip = (page.max(1) - 1) * limit;

        self.find_with_options(
            COL,
            doc! {},
            FindOptions::builder()
                .skip(skip as u64)
                .limit(limit)
                .sort(doc! {
                    "_id": -1_i32
                })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }
}
