use projboard_core::{Project, ProjectId, ProjectStatus};

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Build API", "Create REST endpoints", 3);

    assert!(!project.id.as_str().is_empty());
    assert_eq!(project.title, "Build API");
    assert_eq!(project.description, "Create REST endpoints");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Build API", "Create REST endpoints", 3);
    project.id = ProjectId::from("11111111-2222-4333-8444-555555555555");
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Build API");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "p-1",
        "title": "t",
        "description": "description",
        "people": 1,
        "status": "archived"
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(err.to_string().contains("archived"), "unexpected error: {err}");
}
