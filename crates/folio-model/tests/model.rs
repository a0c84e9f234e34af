//! Deserialization tests against realistic content JSON.

use folio_model::{CategoryFilter, Project, SkillCategory, TimelineEntry, distinct_filters};

#[test]
fn project_parses_full_record() {
    let json = r#"{
        "id": "portfolio-site",
        "title": "Portfolio Site",
        "description": "A personal portfolio with a filterable gallery.",
        "image": "/img/projects/portfolio.jpg",
        "categories": ["web", "frontend"],
        "tags": ["Rust", "Iced"],
        "links": { "demo": "https://example.com", "code": "https://github.com/x/y" },
        "features": ["Light/dark theme", "Keyboard accessible modal"],
        "featured": true
    }"#;

    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.id, "portfolio-site");
    assert!(project.featured);
    assert_eq!(project.categories, vec!["web", "frontend"]);
    assert_eq!(project.links.demo.as_deref(), Some("https://example.com"));
}

#[test]
fn project_defaults_missing_fields() {
    let json = r#"{ "id": "minimal", "title": "Minimal" }"#;
    let project: Project = serde_json::from_str(json).unwrap();

    assert!(!project.featured);
    assert!(project.categories.is_empty());
    assert!(project.links.is_empty());
    assert!(project.features.is_empty());
}

#[test]
fn skill_category_parses_nested_skills() {
    let json = r#"{
        "category": "Backend",
        "icon": "gear",
        "skills": [
            { "name": "Rust", "level": 90, "icon": "rust" },
            { "name": "SQL", "level": 85, "icon": "database" }
        ]
    }"#;

    let category: SkillCategory = serde_json::from_str(json).unwrap();
    assert_eq!(category.skills.len(), 2);
    assert!((category.skills[0].level_fraction() - 0.9).abs() < 1e-6);
}

#[test]
fn timeline_entries_keep_array_order() {
    let json = r#"[
        { "year": "2019", "event": "First job" },
        { "year": "2023", "event": "Went independent" },
        { "year": "2021", "event": "Out of order on purpose" }
    ]"#;

    let entries: Vec<TimelineEntry> = serde_json::from_str(json).unwrap();
    let years: Vec<&str> = entries.iter().map(|e| e.year.as_str()).collect();
    assert_eq!(years, vec!["2019", "2023", "2021"]);
}

#[test]
fn mobile_filter_selects_exact_subset() {
    let projects: Vec<Project> = serde_json::from_str(
        r#"[
            { "id": "a", "title": "A", "categories": ["web"] },
            { "id": "b", "title": "B", "categories": ["mobile", "backend"] },
            { "id": "c", "title": "C", "categories": ["mobile"] }
        ]"#,
    )
    .unwrap();

    let filter = CategoryFilter::category("mobile");
    let selected: Vec<&str> = projects
        .iter()
        .filter(|p| filter.matches(p))
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(selected, vec!["b", "c"]);

    let filters = distinct_filters(&projects);
    assert!(filters.iter().any(|f| f.as_str() == "mobile"));
    assert!(filters[0].is_all());
}
