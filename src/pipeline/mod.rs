// Pipelines: the two user actions, composed from the fetcher, the text
// core, and the store.

pub mod lookup;
pub mod submit;
