use rocket::Route;

mod feed_create;
mod feed_fetch;
mod feed_next;
mod post_create;
mod post_fetch;
mod post_query;

pub fn routes() -> Vec<Route> {
    routes![
        post_create::create_post,
        post_fetch::fetch_post,
        post_query::query_posts,
        feed_create::open_feed,
        feed_fetch::fetch_feed,
        feed_next::next_feed_page,
    ]
}
