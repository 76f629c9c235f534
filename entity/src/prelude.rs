pub use super::system_config::Entity as SystemConfig;
pub use super::volante::Entity as Volante;
