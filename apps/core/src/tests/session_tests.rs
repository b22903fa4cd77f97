//! Session Tests
//!
//! Transcript persistence in a temporary directory.

use regex::Regex;
use tempfile::tempdir;

use crate::models::Role;
use crate::session::Transcript;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();

    let mut transcript = Transcript::new();
    transcript.push_user("Resume tips please");
    transcript.push_assistant("### Resume checklist");
    transcript.push_user("thanks");

    let path = transcript.save(dir.path()).unwrap();
    assert!(path.starts_with(dir.path()));

    let loaded = Transcript::load(&path).unwrap();
    assert_eq!(loaded, transcript);

    let roles: Vec<Role> = loaded.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
    assert_eq!(loaded.messages()[2].content, "thanks");
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("data").join("sessions");

    let path = Transcript::new().save(&nested).unwrap();

    assert!(nested.is_dir());
    assert!(path.is_file());
}

#[test]
fn test_file_name_pattern() {
    let transcript = Transcript::new();
    let name = transcript.file_name();

    let pattern = Regex::new(r"^session_\d{8}_\d{6}_[0-9a-f]{8}\.json$").unwrap();
    assert!(pattern.is_match(&name), "unexpected file name: {}", name);

    let short_id = &transcript.session_id.simple().to_string()[..8];
    assert!(name.contains(short_id));
}

#[test]
fn test_roles_serialize_lowercase() {
    let mut transcript = Transcript::new();
    transcript.push_user("hi");

    let json = serde_json::to_value(&transcript).unwrap();
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "hi");
}

#[test]
fn test_load_rejects_garbage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(Transcript::load(&path).is_err());
    assert!(Transcript::load(dir.path().join("missing.json")).is_err());
}
