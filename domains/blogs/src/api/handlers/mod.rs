//! Request handlers for the blogs domain API

pub mod blogs;
pub mod login;
pub mod users;
