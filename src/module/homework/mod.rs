///! Yandex Practicum homework review status module
///!
///! Fetches the homework statuses endpoint, validates the response shape,
///! and turns the newest review status into a display message.

pub mod client;
pub mod parser;
pub mod types;

pub use client::{HomeworkApi, PracticumClient};
pub use types::{HomeworkRecord, HomeworkStatus, PollResponse};
