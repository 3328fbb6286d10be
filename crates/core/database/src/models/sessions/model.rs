use litterless_result::Result;
use ulid::Ulid;

use crate::{Database, User};

auto_derived!(
    /// Login session
    ///
    /// Sessions are issued by the authentication provider; this
    /// collection is only read to resolve tokens back to users.
    pub struct Session {
        /// Session Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Token used to authenticate requests
        pub token: String,
        /// Id of the user this session belongs to
        pub user_id: String,
    }
);

impl Session {
    /// Create a new session for a user
    pub async fn create(db: &Database, user: &User) -> Result<Session> {
        let session = Session {
            id: Ulid::new().to_string(),
            token: nanoid::nanoid!(64),
            user_id: user.id.clone(),
        };

        db.insert_session(&session).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Session, User};

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let user = User::create(&db, "casey@example.com".to_string(), None)
                .await
                .unwrap();

            let session = Session::create(&db, &user).await.unwrap();

            let fetched = db.fetch_session_by_token(&session.token).await.unwrap();
            assert_eq!(session, fetched);
            assert_eq!(fetched.user_id, user.id);

            db.delete_session(&session.id).await.unwrap();
            assert!(db.fetch_session_by_token(&session.token).await.is_err());
        });
    }
}
