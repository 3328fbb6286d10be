use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Cleanup post
    pub struct Post {
        /// Unique Id
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
        ///
        /// Zero suppresses the collected badge.
        #[serde(skip_serializing_if = "crate::if_zero_u32", default)]
        pub litter_weight: u32,
        /// When this post was created
        pub time_created: Timestamp,
    }

    /// Post joined with its author's profile for the feed
    pub struct FeedPost {
        #[serde(flatten)]
        pub post: Post,
        /// Author display name, blank when missing
        pub author_name: String,
        /// Author photo, placeholder when missing
        pub author_photo: String,
    }

    /// State of a growing feed after a load
    pub struct FeedPage {
        /// Posts revealed by this load
        pub posts: Vec<FeedPost>,
        /// Highest page number reached so far
        pub page: i64,
        /// Whether the feed has permanently run out of posts
        pub exhausted: bool,
        /// Whether a load was already in flight, leaving the feed untouched
        ///
        /// When set, the other fields carry no information.
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub busy: bool,
    }
);

auto_derived!(
    /// New post payload
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreatePost {
        /// Photo URLs, at least one
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 5)))]
        pub photos: Vec<String>,
        /// Free-text description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2000)))]
        pub description: String,
        /// Where the cleanup took place
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 200)))]
        pub location: String,
        /// Pounds of litter collected
        #[serde(default)]
        pub litter_weight: u32,
    }
);
