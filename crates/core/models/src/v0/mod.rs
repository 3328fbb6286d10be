mod calendar;
mod events;
mod posts;
mod rsvps;
mod users;

pub use calendar::*;
pub use events::*;
pub use posts::*;
pub use rsvps::*;
pub use users::*;
