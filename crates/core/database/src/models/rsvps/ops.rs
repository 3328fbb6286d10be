use litterless_result::Result;

use crate::Rsvp;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractRsvps: Sync + Send {
    /// Insert a new RSVP into the database
    async fn insert_rsvp(&self, rsvp: &Rsvp) -> Result<()>;

    /// Fetch an RSVP by its id
    async fn fetch_rsvp(&self, id: &str) -> Result<Rsvp>;

    /// Fetch a user's RSVP for a given event
    async fn fetch_rsvp_for_user(&self, event: &str, user: &str) -> Result<Rsvp>;

    /// Fetch all RSVPs recorded against an event
    async fn fetch_rsvps_for_event(&self, event: &str) -> Result<Vec<Rsvp>>;

    /// Fetch every RSVP in the collection
    async fn fetch_all_rsvps(&self) -> Result<Vec<Rsvp>>;

    /// Delete an RSVP by its id
    async fn delete_rsvp(&self, id: &str) -> Result<()>;
}
