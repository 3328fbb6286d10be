use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Event, Post, Rsvp, Session, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,
        pub posts: Arc<Mutex<HashMap<String, Post>>>,
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub rsvps: Arc<Mutex<HashMap<String, Rsvp>>>,
    }
);

impl ReferenceDb {
    /// Forget everything, used to reset between tests
    pub async fn clear(&self) {
        self.users.lock().await.clear();
        self.sessions.lock().await.clear();
        self.posts.lock().await.clear();
        self.events.lock().await.clear();
        self.rsvps.lock().await.clear();
    }
}
