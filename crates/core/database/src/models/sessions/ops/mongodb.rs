use litterless_result::Result;
use mongodb::bson::doc;

use crate::MongoDb;
use crate::Session;

use super::AbstractSessions;

static COL: &str = "sessions";

#[async_trait]
impl AbstractSessions for MongoDb {
    /// Insert a new session into the database
    async fn insert_session(&self, session: &Session) -> Result<()> {
        query!(self, insert_one, COL, &session).map(|_| ())
    }

    /// Fetch a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "token": token
            }
        )?
        .ok_or_else(|| create_error!(InvalidSession))
    }

    /// Delete a session by its id
    async fn delete_session(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}
