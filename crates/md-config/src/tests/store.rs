use crate::SettingsStore;
use crate::tests::{legacy, read_json, setup_home, write_json, write_text};

use std::fs;

use googletest::assert_that;
use googletest::prelude::{eq, len, none, not, some};
use md_core::ConnectionSettings;
use serde_json::json;
use uuid::Uuid;

const KNOWN_ID: &str = "1b4e28ba-2fa1-11d2-883f-0016d3cca427";

// =========================================================================
// Bootstrap
// =========================================================================

#[test]
fn given_empty_home_when_open_then_settings_file_created_with_defaults() {
    // Given
    let (_temp, locations) = setup_home();

    // When
    let store = SettingsStore::open(locations.clone());

    // Then
    let saved = read_json(&locations.config_file());
    assert_that!(saved["version"], eq(&json!("2.0")));
    assert_that!(saved["batchSize"], eq(&json!(50)));
    assert_that!(store.settings().batch_size, eq(50));
    assert_that!(store.connections(), len(eq(0)));
    assert_that!(Uuid::parse_str(store.anonymous_id()).is_ok(), eq(true));
    assert_that!(saved["anonymousID"], eq(&json!(store.anonymous_id())));
}

#[test]
fn given_empty_home_when_open_then_cache_directory_created() {
    let (_temp, locations) = setup_home();

    SettingsStore::open(locations.clone());

    assert_that!(locations.cache_dir().is_dir(), eq(true));
}

#[test]
fn given_file_without_batch_size_when_open_then_batch_size_is_fifty() {
    let (_temp, locations) = setup_home();
    write_json(&locations.config_file(), &json!({"anonymousID": KNOWN_ID}));

    let store = SettingsStore::open(locations);

    assert_that!(store.settings().batch_size, eq(50));
}

#[test]
fn given_unparseable_file_when_open_then_file_replaced() {
    // Given
    let (_temp, locations) = setup_home();
    write_text(&locations.config_file(), "{ not json");

    // When
    let store = SettingsStore::open(locations.clone());

    // Then
    let saved = read_json(&locations.config_file());
    assert_that!(saved["version"], eq(&json!("2.0")));
    assert_that!(store.anonymous_id().is_empty(), eq(false));
}

#[test]
fn given_non_object_file_and_legacy_install_when_open_then_identity_and_profiles_migrated() {
    // Given
    let (_temp, locations) = setup_home();
    write_text(&locations.config_file(), "[]");
    write_json(
        &locations.legacy_file(legacy("1.4.3")),
        &json!({"anonymousID": KNOWN_ID,
                "connections": [{"connectionName": "old", "serverHost": "h"}]}),
    );

    // When
    let store = SettingsStore::open(locations.clone());

    // Then
    assert_that!(store.anonymous_id(), eq(KNOWN_ID));
    assert_that!(store.connections(), len(eq(1)));
    assert_that!(store.settings().imported(), eq(true));
    assert_that!(store.settings().batch_size, eq(50));
    let saved = read_json(&locations.config_file());
    assert_that!(saved["anonymousID"], eq(&json!(KNOWN_ID)));
}

#[test]
fn given_non_object_file_when_loaded_then_defaults_applied_and_load_succeeds() {
    // Given
    let (_temp, locations) = setup_home();
    write_text(&locations.config_file(), "[1, 2, 3]");
    let mut store = SettingsStore::open(locations.clone());
    store.settings_mut().batch_size = 7;
    write_text(&locations.config_file(), "\"text\"");

    // When
    let loaded = store.load();

    // Then
    assert_that!(loaded, eq(true));
    assert_that!(store.settings().batch_size, eq(50));
    assert_that!(Uuid::parse_str(store.anonymous_id()).is_ok(), eq(true));
}

// =========================================================================
// Load / save
// =========================================================================

#[test]
fn given_existing_id_when_open_then_id_kept() {
    let (_temp, locations) = setup_home();
    write_json(
        &locations.config_file(),
        &json!({"anonymousID": "{1B4E28BA-2FA1-11D2-883F-0016D3CCA427}", "imported": true}),
    );

    let store = SettingsStore::open(locations);

    assert_that!(store.anonymous_id(), eq(KNOWN_ID));
}

#[test]
fn given_loaded_id_when_file_changes_and_reloaded_then_id_unchanged() {
    // Given
    let (_temp, locations) = setup_home();
    write_json(
        &locations.config_file(),
        &json!({"anonymousID": KNOWN_ID, "imported": true}),
    );
    let mut store = SettingsStore::open(locations.clone());

    // When
    write_json(
        &locations.config_file(),
        &json!({"anonymousID": Uuid::new_v4().to_string(), "imported": true}),
    );
    let loaded = store.load();

    // Then
    assert_that!(loaded, eq(true));
    assert_that!(store.anonymous_id(), eq(KNOWN_ID));
}

#[test]
fn given_deleted_file_when_load_then_false_and_state_kept() {
    // Given
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations.clone());
    store.settings_mut().batch_size = 123;
    fs::remove_file(locations.config_file()).unwrap();

    // When
    let loaded = store.load();

    // Then
    assert_that!(loaded, eq(false));
    assert_that!(store.settings().batch_size, eq(123));
}

#[test]
fn given_modified_store_when_saved_and_reopened_then_changes_persist() {
    // Given
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations.clone());
    store.settings_mut().batch_size = 10;
    store.settings_mut().set_current_style("Fusion");
    store.add_connection(ConnectionSettings::new("local", "localhost", 27017));
    let id = store.anonymous_id().to_string();

    // When
    assert_that!(store.save(), eq(true));
    let reopened = SettingsStore::open(locations);

    // Then
    assert_that!(reopened.settings().batch_size, eq(10));
    assert_that!(reopened.settings().current_style(), eq("Fusion"));
    assert_that!(reopened.connections(), len(eq(1)));
    assert_that!(reopened.anonymous_id(), eq(id.as_str()));
}

// =========================================================================
// Connections
// =========================================================================

#[test]
fn given_connections_when_looked_up_by_uuid_then_found_or_none() {
    // Given
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);
    let profile = ConnectionSettings::new("a", "h", 1);
    let uuid = profile.uuid().to_string();
    store.add_connection(profile);

    // Then
    assert_that!(
        store.connection_settings_by_uuid(&uuid).map(|c| c.connection_name.as_str()),
        some(eq("a"))
    );
    assert_that!(store.connection_settings_by_uuid("nope"), none());
}

#[test]
fn given_connection_when_edited_through_mut_lookup_then_change_visible() {
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);
    let profile = ConnectionSettings::new("a", "h", 1);
    let uuid = profile.uuid().to_string();
    store.add_connection(profile);

    store.connection_settings_by_uuid_mut(&uuid).unwrap().server_port = 2;

    assert_that!(store.connections()[0].server_port, eq(2));
}

#[test]
fn given_connection_when_removed_then_gone_and_second_remove_false() {
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);
    let profile = ConnectionSettings::new("a", "h", 1);
    let uuid = profile.uuid().to_string();
    store.add_connection(profile);

    assert_that!(store.remove_connection(&uuid), eq(true));
    assert_that!(store.remove_connection(&uuid), eq(false));
    assert_that!(store.connections(), len(eq(0)));
}

#[test]
fn given_connections_when_reordered_then_sequence_replaced() {
    // Given
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);
    store.add_connection(ConnectionSettings::new("a", "h", 1));
    store.add_connection(ConnectionSettings::new("b", "h", 2));

    // When
    let mut reordered = store.connections().to_vec();
    reordered.reverse();
    store.reorder_connections(reordered);

    // Then
    assert_that!(store.connections()[0].connection_name, eq("b"));
    assert_that!(store.connections()[1].connection_name, eq("a"));
}

#[test]
fn given_same_profile_added_twice_then_uuids_distinct() {
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);
    let profile = ConnectionSettings::new("a", "h", 1);

    store.add_connection(profile.clone());
    store.add_connection(profile);

    assert_that!(
        store.connections()[0].uuid(),
        not(eq(store.connections()[1].uuid()))
    );
}

// =========================================================================
// Migration
// =========================================================================

#[test]
fn given_legacy_file_when_open_then_imported_once_and_flag_persisted() {
    // Given
    let (_temp, locations) = setup_home();
    write_json(
        &locations.legacy_file(legacy("1.4.3")),
        &json!({"connections": [{"connectionName": "old", "serverHost": "h"}]}),
    );

    // When
    let mut store = SettingsStore::open(locations.clone());

    // Then
    assert_that!(store.settings().imported(), eq(true));
    assert_that!(store.imported_connections_count(), eq(1));
    assert_that!(read_json(&locations.config_file())["imported"], eq(&json!(true)));

    // When imported again
    let again = store.import_from_old_version();

    // Then
    assert_that!(again, eq(false));
    assert_that!(store.connections(), len(eq(1)));
}

#[test]
fn given_no_legacy_file_when_import_from_old_version_then_false_and_not_flagged() {
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);

    assert_that!(store.import_from_old_version(), eq(false));
    assert_that!(store.settings().imported(), eq(false));
}

#[test]
fn given_unreadable_newest_legacy_file_when_open_then_flagged_and_older_ignored() {
    // Given
    let (_temp, locations) = setup_home();
    write_text(&locations.legacy_file(legacy("1.4.3")), "{ broken");
    write_json(
        &locations.legacy_file(legacy("1.4.2")),
        &json!({"connections": [{"serverHost": "older"}]}),
    );

    // When
    let store = SettingsStore::open(locations);

    // Then
    assert_that!(store.settings().imported(), eq(true));
    assert_that!(store.connections(), len(eq(0)));
}

#[test]
fn given_reopened_store_when_legacy_file_still_present_then_not_imported_again() {
    let (_temp, locations) = setup_home();
    write_json(
        &locations.legacy_file(legacy("1.3.0")),
        &json!({"connections": [{"serverHost": "h"}]}),
    );

    drop(SettingsStore::open(locations.clone()));
    let store = SettingsStore::open(locations);

    assert_that!(store.connections(), len(eq(1)));
}

// =========================================================================
// Import and session flag
// =========================================================================

#[test]
fn given_external_file_when_loaded_twice_then_true_then_false() {
    // Given
    let (temp, locations) = setup_home();
    let external = temp.path().join("export.json");
    write_json(
        &external,
        &json!({"connections": [{"connectionName": "X", "serverHost": "h", "serverPort": 1}]}),
    );
    let mut store = SettingsStore::open(locations.clone());

    // When
    let first = store.load_connections_from_file(&external);
    let second = store.load_connections_from_file(&external);

    // Then
    assert_that!(first, eq(true));
    assert_that!(second, eq(false));
    assert_that!(store.connections(), len(eq(1)));
    assert_that!(store.connections()[0].connection_name, eq("[External] X"));
    assert_that!(store.imported_connections_count(), eq(1));
    let saved = read_json(&locations.config_file());
    assert_that!(saved["connections"][0]["connectionName"], eq(&json!("[External] X")));
}

#[test]
fn given_missing_external_file_when_loaded_then_false() {
    let (temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations);

    assert_that!(
        store.load_connections_from_file(&temp.path().join("absent.json")),
        eq(false)
    );
}

#[test]
fn given_session_lifecycle_then_crash_flag_round_trips() {
    // Given
    let (_temp, locations) = setup_home();
    let mut store = SettingsStore::open(locations.clone());

    // When
    let clean_before = store.mark_session_started();

    // Then
    assert_that!(clean_before, eq(true));
    assert_that!(
        read_json(&locations.config_file())["programExitedNormally"],
        eq(&json!(false))
    );

    // When the process dies and a new one starts
    let mut next = SettingsStore::open(locations.clone());
    assert_that!(next.mark_session_started(), eq(false));
    next.mark_session_finished();

    // Then
    assert_that!(
        read_json(&locations.config_file())["programExitedNormally"],
        eq(&json!(true))
    );
}
