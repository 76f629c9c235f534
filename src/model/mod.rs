//! Data transfer objects shared by the browser client and the server.

pub mod admin;
pub mod api;
pub mod stats;
pub mod volante;
