#[macro_use]
extern crate rocket;
#[macro_use]
extern crate log;

pub mod calendar;
pub mod feed;
pub mod flow;
pub mod routes;
pub mod util;

use litterless_database::DatabaseInfo;
use rocket_cors::AllowedOrigins;
use std::str::FromStr;

#[launch]
async fn rocket() -> _ {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    pretty_env_logger::init();

    info!(
        "Starting Litterless server [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    litterless_config::init().await;

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Setup database
    let db = DatabaseInfo::Auto.connect().await.unwrap();

    // Launch background task workers.
    litterless_database::tasks::start_workers(db.clone());

    // Configure Rocket
    routes::mount(rocket::build())
        .manage(db)
        .manage(feed::FeedStore::default())
        .manage(flow::FlowStore::default())
        .attach(cors)
}
