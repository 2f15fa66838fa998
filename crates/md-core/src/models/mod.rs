pub mod autocompletion_mode;
pub mod connection_settings;
pub mod credential_settings;
pub mod ssh_settings;
pub mod ssl_settings;
pub mod time_zone_mode;
pub mod uuid_encoding;
pub mod view_mode;
