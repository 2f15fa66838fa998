use crate::{ConnectionSettings, CredentialSettings, DEFAULT_SERVER_PORT, DEFAULT_SSH_PORT};

use googletest::assert_that;
use googletest::prelude::{eq, len, none, not, some};
use serde_json::{Value, json};
use uuid::Uuid;

#[test]
fn given_map_without_uuid_when_from_map_then_uuid_generated() {
    // Given
    let value = json!({"connectionName": "local", "serverHost": "localhost"});

    // When
    let profile = ConnectionSettings::from_map(value.as_object().unwrap());

    // Then
    assert_that!(Uuid::parse_str(profile.uuid()).is_ok(), eq(true));
    assert_that!(profile.server_port, eq(DEFAULT_SERVER_PORT));
    assert_that!(profile.primary_credential(), none());
}

#[test]
fn given_map_with_uuid_when_from_map_then_uuid_kept() {
    let value = json!({"uuid": "abc", "serverPort": "27018"});

    let profile = ConnectionSettings::from_map(value.as_object().unwrap());

    assert_that!(profile.uuid(), eq("abc"));
    assert_that!(profile.server_port, eq(27018));
}

#[test]
fn given_two_new_profiles_then_uuids_differ() {
    let a = ConnectionSettings::new("a", "h", 1);
    let b = ConnectionSettings::new("a", "h", 1);

    assert_that!(a.uuid(), not(eq(b.uuid())));
}

#[test]
fn given_full_profile_when_round_tripped_then_all_fields_and_unknown_keys_kept() {
    // Given
    let value = json!({
        "uuid": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
        "connectionName": "prod",
        "serverHost": "db.example.com",
        "serverPort": 27019,
        "defaultDatabase": "app",
        "imported": true,
        "replicaSet": {"setName": "rs0"},
        "credentials": [
            {"userName": "root", "userPassword": "secret", "databaseName": "admin",
             "mechanism": "SCRAM-SHA-256", "enabled": true, "x509": "keep"}
        ],
        "ssh": {"host": "bastion", "port": 2222, "enabled": true, "method": "publickey",
                "privateKeyFile": "/k", "agent": false},
        "ssl": {"enabled": true, "pemKeyFile": "/pem", "caFile": "/ca"}
    });

    // When
    let profile = ConnectionSettings::from_map(value.as_object().unwrap());
    let encoded = Value::Object(profile.to_map());
    let decoded = ConnectionSettings::from_map(encoded.as_object().unwrap());

    // Then
    assert_that!(decoded, eq(&profile));
    assert_that!(encoded["replicaSet"]["setName"], eq(&json!("rs0")));
    assert_that!(encoded["credentials"][0]["x509"], eq(&json!("keep")));
    assert_that!(encoded["ssh"]["agent"], eq(&json!(false)));
    assert_that!(encoded["ssl"]["caFile"], eq(&json!("/ca")));
    assert_that!(profile.ssh.port, eq(2222));
    assert_that!(profile.ssl.pem_key_file, eq("/pem"));
}

#[test]
fn given_malformed_sub_records_when_from_map_then_only_those_pieces_defaulted() {
    // Given
    let value = json!({
        "connectionName": "odd",
        "credentials": [42, {"userName": "u"}],
        "ssh": "not-an-object",
        "ssl": null
    });

    // When
    let profile = ConnectionSettings::from_map(value.as_object().unwrap());

    // Then
    assert_that!(profile.connection_name, eq("odd"));
    assert_that!(profile.credentials, len(eq(1)));
    assert_that!(profile.credentials[0].database_name, eq("admin"));
    assert_that!(profile.credentials[0].mechanism, eq("SCRAM-SHA-1"));
    assert_that!(profile.ssh.port, eq(DEFAULT_SSH_PORT));
    assert_that!(profile.ssh.method, eq("password"));
    assert_that!(profile.ssl.enabled, eq(false));
}

#[test]
fn given_profile_when_serialized_with_serde_then_same_as_to_map() {
    // Given
    let mut profile = ConnectionSettings::new("n", "h", 1);
    profile.add_credential(CredentialSettings::new("u", "p", "db"));

    // When
    let value = serde_json::to_value(&profile).unwrap();
    let back: ConnectionSettings = serde_json::from_value(value.clone()).unwrap();

    // Then
    assert_that!(value, eq(&Value::Object(profile.to_map())));
    assert_that!(back, eq(&profile));
    assert_that!(back.primary_credential().map(|c| c.enabled), some(eq(true)));
}

#[test]
fn given_profile_when_regenerate_uuid_then_uuid_changes() {
    let mut profile = ConnectionSettings::new("n", "h", 1);
    let before = profile.uuid().to_string();

    profile.regenerate_uuid();

    assert_that!(profile.uuid(), not(eq(before.as_str())));
}

#[test]
fn given_profiles_with_same_host_port_db_then_same_endpoint() {
    let mut a = ConnectionSettings::new("a", "h", 27017);
    let mut b = ConnectionSettings::new("b", "h", 27017);
    a.default_database = "db".into();
    b.default_database = "db".into();

    assert_that!(a.same_endpoint(&b), eq(true));

    b.server_port = 27018;
    assert_that!(a.same_endpoint(&b), eq(false));
    assert_that!(a.server_address(), eq("h:27017"));
}
