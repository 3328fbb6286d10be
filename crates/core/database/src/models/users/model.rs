use litterless_models::v0;
use litterless_result::Result;
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// User profile
    ///
    /// Account registration and login belong to the authentication
    /// provider; this collection only mirrors profile data.
    pub struct User {
        /// User Id
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
    /// Create a new user profile
    pub async fn create<D>(db: &Database, email: String, display_name: D) -> Result<User>
    where
        D: Into<Option<String>>,
    {
        let user = User {
            id: Ulid::new().to_string(),
            display_name: display_name.into(),
            photo_url: None,
            email,
        };

        db.insert_user(&user).await?;
        Ok(user)
    }
}

impl From<User> for v0::User {
    fn from(value: User) -> Self {
        v0::User {
            id: value.id,
            display_name: value.display_name,
            photo_url: value.photo_url,
            email: value.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::User;

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let user = User::create(&db, "jamie@example.com".to_string(), "Jamie".to_string())
                .await
                .unwrap();

            let fetched_user = db.fetch_user(&user.id).await.unwrap();
            assert_eq!(user, fetched_user);

            let missing = db.fetch_user("01FAKEUSER0000000000000000").await;
            assert!(missing.is_err());
        });
    }
}
