/// Profile photo shown when a user has not uploaded one
pub static DEFAULT_PHOTO_URL: &str =
    "https://t4.ftcdn.net/jpg/05/49/98/39/360_F_549983970_bRCkYfk0P6PP5fKbMhZMIb07mCJ6esXL.jpg";

auto_derived!(
    /// User
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Display name
        #[serde(skip_serializing_if = "Option::is_none")]
        pub display_name: Option<String>,
        /// URL to the user's profile photo
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_url: Option<String>,
        /// Email address
        pub email: String,
    }
);

impl User {
    /// Display name, blank when the profile has none
    pub fn display_name_or_blank(&self) -> &str {
        self.display_name.as_deref().unwrap_or(" ")
    }

    /// Profile photo, substituting the default placeholder
    pub fn photo_url_or_default(&self) -> &str {
        self.photo_url.as_deref().unwrap_or(DEFAULT_PHOTO_URL)
    }
}
