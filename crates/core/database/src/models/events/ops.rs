use litterless_result::Result;

use crate::{Event, FieldsEvent, PartialEvent};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch all events, ascending by start time
    async fn fetch_all_events(&self) -> Result<Vec<Event>>;

    /// Update a given event with new information
    async fn update_event(
        &self,
        id: &str,
        event: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()>;

    /// Link an RSVP to an event and add its attendees to the total
    async fn add_rsvp_to_event(&self, id: &str, rsvp_id: &str, attending: u32) -> Result<()>;

    /// Unlink an RSVP from an event and subtract its attendees from the total
    async fn remove_rsvp_from_event(&self, id: &str, rsvp_id: &str, attending: u32) -> Result<()>;

    /// Overwrite an event's attendee total
    async fn set_event_attendance(&self, id: &str, attendance: u32) -> Result<()>;

    /// Delete an event by its id
    ///
    /// Only used to roll back a failed creation; events are never
    /// deleted once fully created.
    async fn delete_event(&self, id: &str) -> Result<()>;
}
