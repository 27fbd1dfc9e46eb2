//! Loading navigation tables from JSON (requires the `serde` feature)

#![cfg(feature = "serde")]

use portal_breadcrumbs::*;

#[test]
fn test_config_from_json() {
    let json = r#"{
        "menu": [{ "name": "Admissions", "path": "/admissions" }],
        "sub_menus": [{
            "section": "admissions",
            "parent": { "name": "Admissions", "path": "/admissions" },
            "items": [{ "label": "Fees & Scholarships", "id": "fees-scholarships" }]
        }]
    }"#;

    let config: NavigationConfig = serde_json::from_str(json).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.max_forward_depth, DEFAULT_MAX_FORWARD_DEPTH);

    let trail = TrailBuilder::new(config).build("/admissions", "#fees-scholarships", None);
    let labels: Vec<&str> = trail.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, ["Home", "Admissions", "Fees & Scholarships"]);
}

#[test]
fn test_portal_config_survives_json() {
    let config = NavigationConfig::portal();
    let json = serde_json::to_string(&config).unwrap();
    let restored: NavigationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_location_with_origin_from_json() {
    let json = r#"{
        "path": "/schools/cs",
        "hash": null,
        "origin": { "from_program": { "path": "/programs/master-degree/ai", "title": "AI Masters" } }
    }"#;
    let location: Location = serde_json::from_str(json).unwrap();

    let trail = TrailBuilder::new(NavigationConfig::portal()).build_for(&location);
    assert_eq!(trail[2], BreadcrumbEntry::new("/programs/master-degree/ai", "AI Masters"));
}
