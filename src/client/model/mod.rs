pub mod accessibility;
pub mod error;
