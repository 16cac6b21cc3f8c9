mod client;
mod dev_backend;
pub mod domain;
mod error;
pub mod time_utils;

pub use client::*;
pub use dev_backend::DevBackend;
pub use domain::{Entry, NewEntry};
pub use error::ApiError;
