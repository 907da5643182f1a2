//! Async runtime primitives for scoring operations.

mod async_task;

pub use async_task::AsyncTask;
