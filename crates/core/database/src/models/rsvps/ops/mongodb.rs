use litterless_result::Result;
use mongodb::bson::doc;

use crate::MongoDb;
use crate::Rsvp;

use super::AbstractRsvps;

static COL: &str = "rsvp";

#[async_trait]
impl AbstractRsvps for MongoDb {
    /// Insert a new RSVP into the database
    async fn insert_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        query!(self, insert_one, COL, &rsvp).map(|_| ())
    }

    /// Fetch an RSVP by its id
    async fn fetch_rsvp(&self, id: &str) -> Result<Rsvp> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownRsvp))
    }

    /// Fetch a user's RSVP for a given event
    async fn fetch_rsvp_for_user(&self, event: &str, user: &str) -> Result<Rsvp> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "event": event,
                "user": user
            }
        )?
        .ok_or_else(|| create_error!(NotAttending))
    }

    /// Fetch all RSVPs recorded against an event
    async fn fetch_rsvps_for_event(&self, event: &str) -> Result<Vec<Rsvp>> {
        self.find(
            COL,
            doc! {
                "event": event
            },
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Fetch every RSVP in the collection
    async fn fetch_all_rsvps(&self) -> Result<Vec<Rsvp>> {
        self.find(COL, doc! {})
            .await
            .map_err(|_| create_database_error!("find", COL))
    }

    /// Delete an RSVP by its id
    async fn delete_rsvp(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}
