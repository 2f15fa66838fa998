mod connection_settings;
mod preference_enums;
