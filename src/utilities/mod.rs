pub mod config;
pub mod direction;
pub mod error;
pub mod event;
pub mod request;
