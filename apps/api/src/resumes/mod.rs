// Stored resume documents, one per user. The generation pipeline never reads or writes
// these; the client saves form data here independently of generating.

pub mod handlers;
pub mod repository;
