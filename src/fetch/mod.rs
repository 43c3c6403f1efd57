// Document fetching: HTTP retrieval of ebook pages.

pub mod client;
pub mod traits;
