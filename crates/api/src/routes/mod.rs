use rocket::{Build, Rocket};

mod events;
mod posts;
mod root;
mod users;

pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", routes![root::root])
        .mount("/posts", posts::routes())
        .mount("/events", events::routes())
        .mount("/users", users::routes())
}
