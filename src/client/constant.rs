pub const SITE_NAME: &str = "Bolão Mega-Sena";

/// `localStorage` key holding the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "megasena-admin-token";
pub const FONT_SIZE_KEY: &str = "megasena-font-size";
pub const HIGH_CONTRAST_KEY: &str = "megasena-high-contrast";
