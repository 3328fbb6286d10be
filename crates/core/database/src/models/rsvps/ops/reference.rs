use litterless_result::Result;

use crate::ReferenceDb;
use crate::Rsvp;

use super::AbstractRsvps;

#[async_trait]
impl AbstractRsvps for ReferenceDb {
    /// Insert a new RSVP into the database
    async fn insert_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        let mut rsvps = self.rsvps.lock().await;
        if rsvps.contains_key(&rsvp.id) {
            Err(create_database_error!("insert", "rsvp"))
        } else {
            rsvps.insert(rsvp.id.clone(), rsvp.clone());
            Ok(())
        }
    }

    /// Fetch an RSVP by its id
    async fn fetch_rsvp(&self, id: &str) -> Result<Rsvp> {
        let rsvps = self.rsvps.lock().await;
        rsvps
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownRsvp))
    }

    /// Fetch a user's RSVP for a given event
    async fn fetch_rsvp_for_user(&self, event: &str, user: &str) -> Result<Rsvp> {
        let rsvps = self.rsvps.lock().await;
        rsvps
            .values()
            .find(|rsvp| rsvp.event == event && rsvp.user == user)
            .cloned()
            .ok_or_else(|| create_error!(NotAttending))
    }

    /// Fetch all RSVPs recorded against an event
    async fn fetch_rsvps_for_event(&self, event: &str) -> Result<Vec<Rsvp>> {
        let rsvps = self.rsvps.lock().await;
        Ok(rsvps
            .values()
            .filter(|rsvp| rsvp.event == event)
            .cloned()
            .collect())
    }

    /// Fetch every RSVP in the collection
    async fn fetch_all_rsvps(&self) -> Result<Vec<Rsvp>> {
        let rsvps = self.rsvps.lock().await;
        Ok(rsvps.values().cloned().collect())
    }

    /// Delete an RSVP by its id
    async fn delete_rsvp(&self, id: &str) -> Result<()> {
        let mut rsvps = self.rsvps.lock().await;
        rsvps
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| create_error!(UnknownRsvp))
    }
}
