// Wordrank: top-N word frequencies for Project Gutenberg ebooks.
//
// This is the library root. The text core (extraction and ranking) is pure;
// fetch and db are the I/O edges; pipeline composes them into the two user
// actions.

pub mod config;
pub mod db;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod text;
