use rocket::Route;

mod fetch_self;
mod fetch_user;

pub fn routes() -> Vec<Route> {
    routes![fetch_self::fetch_self, fetch_user::fetch_user]
}
