use litterless_result::Result;
use mongodb::bson::doc;
use mongodb::bson::Document;
use mongodb::options::FindOptions;

use crate::{Event, FieldsEvent, IntoDocumentPath, MongoDb, PartialEvent};

use super::AbstractEvents;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, &event).map(|_| ())
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, ascending by start time
    async fn fetch_all_events(&self) -> Result<Vec<Event>> {
        self.find_with_options(
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! {
                    "start_time": 1_i32
                })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Update a given event with new information
    async fn update_event(
        &self,
        id: &str,
        event: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        query!(
            self,
            update_one_by_id,
            COL,
            id,
            event,
            remove.iter().map(|x| x as &dyn IntoDocumentPath).collect()
        )
        .map(|_| ())
    }

    /// Link an RSVP to an event and add its attendees to the total
    async fn add_rsvp_to_event(&self, id: &str, rsvp_id: &str, attending: u32) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": id
                },
                doc! {
                    "$addToSet": {
                        "rsvps": rsvp_id
                    },
                    "$inc": {
                        "attendance": attending as i64
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    /// Unlink an RSVP from an event and subtract its attendees from the total
    async fn remove_rsvp_from_event(&self, id: &str, rsvp_id: &str, attending: u32) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": id
                },
                doc! {
                    "$pull": {
                        "rsvps": rsvp_id
                    },
                    "$inc": {
                        "attendance": -(attending as i64)
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    /// Overwrite an event's attendee total
    async fn set_event_attendance(&self, id: &str, attendance: u32) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": id
                },
                doc! {
                    "$set": {
                        "attendance": attendance as i64
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}

impl IntoDocumentPath for FieldsEvent {
    fn as_path(&self) -> Option<&'static str> {
        Some(match self {
            FieldsEvent::Coordinate => "coordinate",
        })
    }
}
