//! REST API endpoint implementations.

mod listing;
mod request;

pub use listing::fetch_page;
pub use request::send_request;
