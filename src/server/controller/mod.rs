//! HTTP handlers.
//!
//! Handlers extract request data, apply the admin guard where needed, call a service
//! and convert the resulting domain model into a DTO.

pub mod admin;
pub mod stats;
pub mod volante;

#[cfg(test)]
mod test;
