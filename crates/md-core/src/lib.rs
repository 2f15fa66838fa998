pub mod error;
pub mod models;
pub mod variant;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::autocompletion_mode::AutocompletionMode;
pub use models::connection_settings::ConnectionSettings;
pub use models::credential_settings::CredentialSettings;
pub use models::ssh_settings::SshSettings;
pub use models::ssl_settings::SslSettings;
pub use models::time_zone_mode::TimeZoneMode;
pub use models::uuid_encoding::UuidEncoding;
pub use models::view_mode::ViewMode;

pub const DEFAULT_SERVER_PORT: i32 = 27017;
pub const DEFAULT_SSH_PORT: i32 = 22;
pub const DEFAULT_SSH_AUTH_METHOD: &str = "password";
pub const PUBLIC_KEY_SSH_AUTH_METHOD: &str = "publickey";
pub const DEFAULT_AUTH_DATABASE: &str = "admin";
pub const DEFAULT_AUTH_MECHANISM: &str = "SCRAM-SHA-1";
