#[cfg(feature = "web")]
pub mod admin;
#[cfg(feature = "web")]
pub mod helper;
#[cfg(feature = "web")]
pub mod stats;
#[cfg(feature = "web")]
pub mod volante;

#[cfg(feature = "web")]
pub use stats::get_top_numbers;
#[cfg(feature = "web")]
pub use volante::submit_volante;
