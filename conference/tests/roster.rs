use conference::{Roster, SpeakerId};

/// Integration tests that exercise the roster end to end, from a JSON fixture
/// file through filtering and favorite toggling.

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/speakers.json")
}

#[test]
fn test_load_fixture_roster() {
    let roster = Roster::load(fixture_path()).expect("fixture roster should parse");

    assert_eq!(roster.len(), 4);

    // Favorite flags default to false when the file omits them
    for speaker in roster.iter() {
        assert!(!speaker.is_favorite, "{} should not start favorited", speaker.full_name());
    }
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let result = Roster::load("/nonexistent/speakers.json");
    assert!(result.is_err());
}

#[test]
fn test_search_then_toggle_workflow() {
    let mut roster = Roster::load(fixture_path()).unwrap();

    // Search narrows the visible set without touching the roster
    let visible = roster.filter("lin");
    assert_eq!(visible.len(), 1);
    let id = visible[0].get_id().clone();
    assert_eq!(roster.len(), 4);

    // Toggling the found speaker favorites only that speaker
    assert!(roster.toggle_favorite(&id).unwrap());
    let favorited: Vec<&SpeakerId> = roster
        .iter()
        .filter(|s| s.is_favorite)
        .map(|s| s.get_id())
        .collect();
    assert_eq!(favorited, vec![&id]);

    // Clearing the query brings everyone back, favorite intact
    let visible = roster.filter("");
    assert_eq!(visible.len(), 4);
    assert!(roster.get(&id).unwrap().is_favorite);
}

#[test]
fn test_excerpt_and_image_path_from_fixture() {
    let roster = Roster::load(fixture_path()).unwrap();
    let speaker = roster.get(&SpeakerId::new("1787")).unwrap();

    assert!(speaker.bio_excerpt().ends_with("..."));
    assert_eq!(speaker.image_path(), "/speakers/speaker-1787.jpg");
}
