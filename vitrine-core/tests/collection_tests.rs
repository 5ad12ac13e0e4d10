//! Integration tests for the feed models.

use vitrine_core::{LanguageBranding, ProjectCollection, ProjectRecord};

#[test]
fn test_full_feed_deserialization() {
    let json = r#"{
        "projects": [{
            "id": 1,
            "name": "x",
            "full_name": "u/x",
            "description": "d",
            "html_url": "h",
            "language": "Go",
            "stargazers_count": 3,
            "forks_count": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z",
            "topics": []
        }],
        "lastUpdated": "2025-01-01"
    }"#;

    let collection: ProjectCollection = serde_json::from_str(json).unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.last_updated, "2025-01-01");
    assert_eq!(collection.projects[0].language, "Go");
}

#[test]
fn test_record_branding_lookup() {
    let record = ProjectRecord {
        language: "Python".to_string(),
        ..ProjectRecord::default()
    };
    let branding = LanguageBranding::for_language(&record.language);
    assert_eq!(branding.color, "#3572A5");
}
