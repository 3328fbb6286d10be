use iso8601_timestamp::Timestamp;
use litterless_config::config;
use litterless_models::v0;
use litterless_result::Result;
use ulid::Ulid;

use crate::events::client::EventV1;
use crate::{Database, User};

auto_derived!(
    /// Cleanup post
    pub struct Post {
        /// Post Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who created this post
        pub author: String,
        /// Ordered photo URLs shown in the carousel
        pub photos: Vec<String>,
        /// Free-text description
        pub description: String,
        /// Where the cleanup took place
        pub location: String,
        /// Pounds of litter collected
        #[serde(skip_serializing_if = "crate::if_zero_u32", default)]
        pub litter_weight: u32,
        /// When this post was created
        pub time_created: Timestamp,
    }
);

impl Post {
    /// Create a new post
    pub async fn create(db: &Database, author: &User, data: v0::DataCreatePost) -> Result<Post> {
        let config = config().await;

        // The carousel cannot render a post without photos.
        if data.photos.is_empty() {
            return Err(create_error!(MissingPhotos));
        }

        let max = config.features.limits.default.post_photos;
        if data.photos.len() > max {
            return Err(create_error!(TooManyPhotos { max }));
        }

        let post = Post {
            id: Ulid::new().to_string(),
            author: author.id.clone(),
            photos: data.photos,
            description: data.description,
            location: data.location,
            litter_weight: data.litter_weight,
            time_created: Timestamp::now_utc(),
        };

        db.insert_post(&post).await?;

        EventV1::PostCreate(post.clone().into())
            .p("posts".to_string())
            .await;

        Ok(post)
    }
}

impl From<Post> for v0::Post {
    fn from(value: Post) -> Self {
        v0::Post {
            id: value.id,
            author: value.author,
            photos: value.photos,
            description: value.description,
            location: value.location,
            litter_weight: value.litter_weight,
            time_created: value.time_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use litterless_models::v0;

    use crate::{Post, User};

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let author = User::create(&db, "sam@example.com".to_string(), "Sam".to_string())
                .await
                .unwrap();

            let post = Post::create(
                &db,
                &author,
                v0::DataCreatePost {
                    photos: vec!["https://example.com/1.webp".to_string()],
                    description: "Cleaned up the riverbank.".to_string(),
                    location: "Portland, ME".to_string(),
                    litter_weight: 12,
                },
            )
            .await
            .unwrap();

            let fetched_post = db.fetch_post(&post.id).await.unwrap();
            assert_eq!(post, fetched_post);
        });
    }

    #[async_std::test]
    async fn reject_post_without_photos() {
        database_test!(|db| async move {
            let author = User::create(&db, "sam@example.com".to_string(), None)
                .await
                .unwrap();

            assert!(Post::create(
                &db,
                &author,
                v0::DataCreatePost {
                    photos: vec![],
                    description: "No photos.".to_string(),
                    location: "Portland, ME".to_string(),
                    litter_weight: 0,
                },
            )
            .await
            .is_err());
        });
    }

    #[async_std::test]
    async fn paginate_newest_first() {
        database_test!(|db| async move {
            let author = User::create(&db, "sam@example.com".to_string(), None)
                .await
                .unwrap();

            // Ids are ulids in practice; anything lexicographically
            // ordered stands in for creation order here.
            for n in 0..6 {
                db.insert_post(&Post {
                    id: format!("POST{n}"),
                    author: author.id.clone(),
                    photos: vec![format!("https://example.com/{n}.webp")],
                    description: format!("Post {n}"),
                    location: "Portland, ME".to_string(),
                    litter_weight: 0,
                    time_created: iso8601_timestamp::Timestamp::now_utc(),
                })
                .await
                .unwrap();
            }

            let first = db.fetch_posts_page(1, 4).await.unwrap();
            assert_eq!(first.len(), 4);
            assert_eq!(first[0].id, "POST5");

            let second = db.fetch_posts_page(2, 4).await.unwrap();
            assert_eq!(second.len(), 2);
            assert_eq!(second[1].id, "POST0");

            let third = db.fetch_posts_page(3, 4).await.unwrap();
            assert!(third.is_empty());
        });
    }
}
