use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::lock::Mutex;
use ulid::Ulid;

use litterless_database::{Database, Post};
use litterless_models::v0;
use litterless_result::{create_error, Result};

/// Growing, deduplicated, insertion-ordered feed of posts
///
/// Pages are requested at a fixed size; once a page comes back empty
/// the feed is permanently exhausted and no further requests are made.
pub struct PostFeed {
    page_size: i64,
    page: i64,
    exhausted: bool,
    seen: HashSet<String>,
    posts: Vec<v0::FeedPost>,
}

impl PostFeed {
    /// Create an empty feed
    pub fn new(page_size: i64) -> Self {
        PostFeed {
            page_size,
            page: 0,
            exhausted: false,
            seen: HashSet::new(),
            posts: Vec::new(),
        }
    }

    /// Highest page number reached so far
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Whether the feed has permanently run out of posts
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Everything loaded into the feed so far
    pub fn posts(&self) -> &[v0::FeedPost] {
        &self.posts
    }

    /// Request the next page and append any posts not seen before
    ///
    /// An empty page permanently exhausts the feed; a failed fetch
    /// propagates instead, leaving the feed free to retry.
    pub async fn load_next_page(&mut self, db: &Database) -> Result<Vec<v0::FeedPost>> {
        if self.exhausted {
            return Ok(vec![]);
        }

        let next_page = self.page + 1;
        let fetched = db.fetch_posts_page(next_page, self.page_size).await?;

        if fetched.is_empty() {
            self.exhausted = true;
            return Ok(vec![]);
        }

        self.page = next_page;

        let mut appended = vec![];
        for post in fetched {
            // A post already on an earlier page (e.g. pushed down by
            // newer posts between loads) is dropped here.
            if self.seen.insert(post.id.clone()) {
                let post = with_author(db, post).await;
                self.posts.push(post.clone());
                appended.push(post);
            }
        }

        Ok(appended)
    }
}

/// Join a post with its author's profile
///
/// A missing profile falls back to a blank name and the placeholder
/// photo rather than failing the feed.
pub async fn with_author(db: &Database, post: Post) -> v0::FeedPost {
    let author: Option<v0::User> = db.fetch_user(&post.author).await.ok().map(Into::into);

    let (author_name, author_photo) = match &author {
        Some(user) => (
            user.display_name_or_blank().to_string(),
            user.photo_url_or_default().to_string(),
        ),
        None => (" ".to_string(), v0::DEFAULT_PHOTO_URL.to_string()),
    };

    v0::FeedPost {
        post: post.into(),
        author_name,
        author_photo,
    }
}

/// Feeds currently held open by clients, addressed by id
#[derive(Default)]
pub struct FeedStore {
    feeds: Mutex<HashMap<String, Arc<Mutex<PostFeed>>>>,
}

impl FeedStore {
    /// Open a new feed and hand back its id
    pub async fn create(&self, page_size: i64) -> String {
        let id = Ulid::new().to_string();

        let mut feeds = self.feeds.lock().await;
        feeds.insert(id.clone(), Arc::new(Mutex::new(PostFeed::new(page_size))));
        id
    }

    /// Fetch a feed by its id
    async fn fetch(&self, id: &str) -> Result<Arc<Mutex<PostFeed>>> {
        let feeds = self.feeds.lock().await;
        feeds.get(id).cloned().ok_or_else(|| create_error!(NotFound))
    }

    /// Trigger the next load on a feed
    ///
    /// At most one load runs per feed at a time; a trigger arriving
    /// while one is in flight returns immediately without loading.
    pub async fn next(&self, db: &Database, id: &str) -> Result<v0::FeedPage> {
        let feed = self.fetch(id).await?;

        match feed.try_lock() {
            Some(mut feed) => {
                let posts = feed.load_next_page(db).await?;

                Ok(v0::FeedPage {
                    posts,
                    page: feed.page(),
                    exhausted: feed.is_exhausted(),
                    busy: false,
                })
            }
            None => Ok(v0::FeedPage {
                posts: vec![],
                page: 0,
                exhausted: false,
                busy: true,
            }),
        }
    }

    /// Everything a feed has loaded so far
    pub async fn snapshot(&self, id: &str) -> Result<v0::FeedPage> {
        let feed = self.fetch(id).await?;
        let feed = feed.lock().await;

        Ok(v0::FeedPage {
            posts: feed.posts().to_vec(),
            page: feed.page(),
            exhausted: feed.is_exhausted(),
            busy: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use iso8601_timestamp::Timestamp;

    use litterless_database::{Database, DatabaseInfo, Post};

    use super::PostFeed;

    async fn connect() -> Database {
        let db = DatabaseInfo::Test("feed".to_string())
            .connect()
            .await
            .expect("Database connection failed.");

        db.drop_database().await;
        db
    }

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            author: "01USER0000000000000000000000".to_string(),
            photos: vec!["https://example.com/photo.webp".to_string()],
            description: String::new(),
            location: "Portland, ME".to_string(),
            litter_weight: 0,
            time_created: Timestamp::now_utc(),
        }
    }

    #[async_std::test]
    async fn deduplicates_across_pages() {
        let db = connect().await;

        // Pages are newest-first, so ids decide the page split.
        for id in ["A", "B", "C", "D", "E"] {
            db.insert_post(&post(id)).await.unwrap();
        }

        let mut feed = PostFeed::new(4);
        let appended = feed.load_next_page(&db).await.unwrap();
        assert_eq!(appended.len(), 4);

        // A newer post shifts the page boundary: page two now starts
        // with a post the feed has already rendered.
        db.insert_post(&post("F")).await.unwrap();

        let appended = feed.load_next_page(&db).await.unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].post.id, "A");

        let ids: Vec<&str> = feed.posts().iter().map(|p| p.post.id.as_str()).collect();
        assert_eq!(ids, vec!["E", "D", "C", "B", "A"]);
    }

    #[async_std::test]
    async fn empty_page_permanently_exhausts() {
        let db = connect().await;

        for id in ["A", "B"] {
            db.insert_post(&post(id)).await.unwrap();
        }

        let mut feed = PostFeed::new(4);
        assert_eq!(feed.load_next_page(&db).await.unwrap().len(), 2);
        assert!(!feed.is_exhausted());

        assert!(feed.load_next_page(&db).await.unwrap().is_empty());
        assert!(feed.is_exhausted());
        assert_eq!(feed.page(), 1);

        // New posts appearing later do not revive the feed.
        db.insert_post(&post("C")).await.unwrap();
        assert!(feed.load_next_page(&db).await.unwrap().is_empty());
        assert_eq!(feed.page(), 1);

        db.drop_database().await;
    }
}
