// Tests for in-app navigation

use memobread::router::{Page, Router};

#[test]
fn test_known_paths_resolve() {
    assert_eq!(Router::resolve("/record"), Page::Record);
    assert_eq!(Router::resolve("/history"), Page::History);
    assert_eq!(Router::resolve("/locations"), Page::Locations);
    assert_eq!(Router::resolve("/search"), Page::Search);
}

#[test]
fn test_first_segment_decides_page() {
    assert_eq!(Router::resolve("/history/abc"), Page::History);
    assert_eq!(Router::resolve("/search?q=river"), Page::Search);
    assert_eq!(Router::resolve("/locations#top"), Page::Locations);
}

#[test]
fn test_unknown_paths_fall_back_to_record() {
    assert_eq!(Router::resolve("/settings"), Page::Record);
    assert_eq!(Router::resolve("/"), Page::Record);
    assert_eq!(Router::resolve(""), Page::Record);
    assert_eq!(Router::resolve("/HISTORY"), Page::Record);
}

#[test]
fn test_default_router_starts_on_record() {
    let router = Router::new();
    assert_eq!(router.current(), Page::Record);
    assert_eq!(router.history(), ["/record".to_string()]);
}

#[test]
fn test_intercept_ignores_external_links() {
    let mut router = Router::new();

    assert_eq!(router.intercept("https://example.com/history"), None);
    assert_eq!(router.intercept("history"), None);
    assert_eq!(router.current(), Page::Record);
    assert_eq!(router.history().len(), 1);
}

#[test]
fn test_intercept_navigates_and_pushes_history() {
    let mut router = Router::new();

    assert_eq!(router.intercept("/history"), Some(Page::History));
    assert_eq!(router.intercept("/nowhere"), Some(Page::Record));
    assert_eq!(router.current(), Page::Record);
    assert_eq!(router.history(), ["/record", "/history", "/nowhere"]);
}

#[test]
fn test_back_returns_to_previous_page() {
    let mut router = Router::with_initial_path("/search");
    router.navigate("/locations");
    router.navigate("/history");

    assert_eq!(router.back(), Some(Page::Locations));
    assert_eq!(router.back(), Some(Page::Search));
    assert_eq!(router.back(), None, "The initial path stays");
    assert_eq!(router.current(), Page::Search);
}

#[test]
fn test_page_paths_round_trip() {
    for page in Page::ALL {
        assert_eq!(Router::resolve(page.path()), page);
    }
}
