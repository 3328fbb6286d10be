use litterless_result::Result;

use crate::ReferenceDb;
use crate::{Event, FieldsEvent, PartialEvent};

use super::AbstractEvents;

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "events"))
        } else {
            events.insert(event.id.clone(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, ascending by start time
    async fn fetch_all_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;

        let mut events: Vec<Event> = events.values().cloned().collect();
        events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(events)
    }

    /// Update a given event with new information
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        let mut events = self.events.lock().await;
        let event = events.get_mut(id).ok_or_else(|| create_error!(UnknownEvent))?;

        for field in remove {
            match field {
                FieldsEvent::Coordinate => event.coordinate = None,
            }
        }

        if let Some(title) = &partial.title {
            event.title = title.clone();
        }

        if let Some(description) = &partial.description {
            event.description = description.clone();
        }

        if let Some(location) = &partial.location {
            event.location = location.clone();
        }

        if let Some(coordinate) = &partial.coordinate {
            event.coordinate = Some(coordinate.clone());
        }

        Ok(())
    }

    /// Link an RSVP to an event and add its attendees to the total
    async fn add_rsvp_to_event(&self, id: &str, rsvp_id: &str, attending: u32) -> Result<()> {
        let mut events = self.events.lock().await;
        let event = events.get_mut(id).ok_or_else(|| create_error!(UnknownEvent))?;

        if !event.rsvps.iter().any(|id| id == rsvp_id) {
            event.rsvps.push(rsvp_id.to_string());
            event.attendance += attending;
        }

        Ok(())
    }

    /// Unlink an RSVP from an event and subtract its attendees from the total
    async fn remove_rsvp_from_event(&self, id: &str, rsvp_id: &str, attending: u32) -> Result<()> {
        let mut events = self.events.lock().await;
        let event = events.get_mut(id).ok_or_else(|| create_error!(UnknownEvent))?;

        if event.rsvps.iter().any(|id| id == rsvp_id) {
            event.rsvps.retain(|id| id != rsvp_id);
            event.attendance = event.attendance.saturating_sub(attending);
        }

        Ok(())
    }

    /// Overwrite an event's attendee total
    async fn set_event_attendance(&self, id: &str, attendance: u32) -> Result<()> {
        let mut events = self.events.lock().await;
        let event = events.get_mut(id).ok_or_else(|| create_error!(UnknownEvent))?;

        event.attendance = attendance;
        Ok(())
    }

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        events
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| create_error!(UnknownEvent))
    }
}
