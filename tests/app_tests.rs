// Integration tests for the navigation shell and page rendering

mod common;

use anyhow::Result;
use common::{recording, MockApi};
use memobread::capture::{PlaceholderAudio, UnavailableLocator};
use memobread::{
    ActiveView, App, Config, Locale, Page, PlaceholderScorer, Services,
};
use std::sync::Arc;
use std::time::Duration;

fn config(locale: Locale) -> Result<Config> {
    let mut cfg = Config::load(None)?;
    cfg.ui.locale = locale;
    Ok(cfg)
}

fn services(api: Arc<MockApi>) -> Services {
    Services {
        api,
        audio: Arc::new(PlaceholderAudio),
        locator: Arc::new(UnavailableLocator),
        scorer: Arc::new(PlaceholderScorer),
    }
}

#[tokio::test]
async fn test_starts_on_record_page() -> Result<()> {
    let app = App::new(&config(Locale::ZhCn)?, services(Arc::new(MockApi::default())));

    assert_eq!(app.page(), Page::Record);
    assert!(matches!(app.view(), ActiveView::Record(_)));
    assert!(app.render().contains("点击开始录音"));
    Ok(())
}

#[tokio::test]
async fn test_navigation_swaps_views() -> Result<()> {
    let api = Arc::new(MockApi::with_recordings(vec![recording(
        "a",
        "River walk",
        Some("上海"),
    )]));
    let mut app = App::new(&config(Locale::ZhCn)?, services(api.clone()));

    assert_eq!(app.open("/history"), Some(Page::History));
    app.settle().await;
    assert!(matches!(app.view(), ActiveView::History(_)));
    let page = app.render();
    assert!(page.contains("River walk"));
    assert!(page.contains("上海"));

    assert_eq!(app.open("/locations"), Some(Page::Locations));
    app.settle().await;
    assert!(app.render().contains("1 条记录"));
    assert_eq!(api.list_count(), 2, "Each activation fetches once");

    assert_eq!(app.open("/unknown"), Some(Page::Record));
    assert!(matches!(app.view(), ActiveView::Record(_)));

    assert_eq!(app.back(), Some(Page::Locations));
    assert!(matches!(app.view(), ActiveView::Locations(_)));
    Ok(())
}

#[tokio::test]
async fn test_external_link_is_ignored() -> Result<()> {
    let api = Arc::new(MockApi::default());
    let mut app = App::new(&config(Locale::ZhCn)?, services(api));

    assert_eq!(app.open("https://example.com"), None);
    assert_eq!(app.page(), Page::Record);
    assert_eq!(app.router().history().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_same_page_keeps_view() -> Result<()> {
    let api = Arc::new(MockApi::default());
    let mut app = App::new(&config(Locale::ZhCn)?, services(api.clone()));

    app.open("/history");
    app.settle().await;
    app.open("/history");
    app.settle().await;

    assert_eq!(api.list_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_states_render() -> Result<()> {
    let cfg = config(Locale::En)?;
    let messages = cfg.ui.locale.messages();
    let mut app = App::new(&cfg, services(Arc::new(MockApi::default())));

    app.open("/history");
    app.settle().await;
    assert!(app.render().contains(messages.history_empty));

    app.open("/locations");
    app.settle().await;
    assert!(app.render().contains(messages.locations_empty));

    app.open("/search");
    assert!(app.render().contains(messages.search_prompt));
    if let ActiveView::Search(view) = app.view_mut() {
        view.submit("river");
    }
    app.settle().await;
    let page = app.render();
    assert!(page.contains(messages.search_empty));
    assert!(!page.contains(messages.searching));
    Ok(())
}

#[tokio::test]
async fn test_failure_renders_message() -> Result<()> {
    let cfg = config(Locale::ZhCn)?;
    let mut app = App::with_initial_path(&cfg, services(Arc::new(MockApi::failing())), "/history");

    app.settle().await;
    assert!(app.render().contains("获取历史记录失败，请重试"));
    Ok(())
}

#[tokio::test]
async fn test_search_results_render_similarity() -> Result<()> {
    let api = Arc::new(MockApi::with_recordings(vec![
        recording("a", "River walk", None),
        recording("b", "Groceries", None),
    ]));
    let mut app = App::with_initial_path(&config(Locale::En)?, services(api), "/search");

    if let ActiveView::Search(view) = app.view_mut() {
        view.submit("river");
    }
    app.settle().await;

    let page = app.render();
    assert!(page.contains("River walk"));
    assert!(!page.contains("Groceries"));
    assert!(page.contains("Match: "));
    assert!(page.contains("Unknown location"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_leaving_record_page_discards_session() -> Result<()> {
    let api = Arc::new(MockApi::default());
    let mut app = App::new(&config(Locale::ZhCn)?, services(api.clone()));

    let updates = match app.view_mut() {
        ActiveView::Record(flow) => {
            assert!(flow.start());
            flow.subscribe()
        }
        _ => panic!("Expected record page"),
    };

    tokio::time::sleep(Duration::from_millis(2500)).await;
    app.open("/history");
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(updates.borrow().elapsed_secs, 2);
    assert_eq!(api.create_count(), 0);
    Ok(())
}
