use super::*;

#[test]
fn components_are_sorted_and_unique() {
    let names: Vec<&str> = OPEN_SOURCE_COMPONENTS.iter().map(|c| c.name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
}

#[test]
fn components_link_over_https_with_license() {
    for c in OPEN_SOURCE_COMPONENTS {
        assert!(c.url.starts_with("https://"), "{} url {}", c.name, c.url);
        assert!(!c.license.is_empty(), "{} has no license", c.name);
    }
}

#[test]
fn ui_framework_is_credited() {
    assert!(OPEN_SOURCE_COMPONENTS.iter().any(|c| c.name == "leptos"));
}
