//! Data models for the directory source.

pub mod random_user;

pub use random_user::{RandomUser, RandomUserResponse};
