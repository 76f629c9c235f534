//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (store) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating store calls for one request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod entry_status;
pub mod stats;
pub mod validation;
pub mod volante;
