use std::sync::Arc;
use tracing::info;

use crate::api::RecordingApi;
use crate::capture::{AudioSource, CaptureFlow, GeoLocator};
use crate::config::{CaptureConfig, Config};
use crate::i18n::{Locale, Messages};
use crate::render;
use crate::router::{Page, Router};
use crate::views::{HistoryView, LocationsView, RelevanceScorer, SearchView};

/// Collaborators the views are built from
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn RecordingApi>,
    pub audio: Arc<dyn AudioSource>,
    pub locator: Arc<dyn GeoLocator>,
    pub scorer: Arc<dyn RelevanceScorer>,
}

/// The view currently on screen
pub enum ActiveView {
    Record(CaptureFlow),
    History(HistoryView),
    Locations(LocationsView),
    Search(SearchView),
}

impl ActiveView {
    pub fn page(&self) -> Page {
        match self {
            ActiveView::Record(_) => Page::Record,
            ActiveView::History(_) => Page::History,
            ActiveView::Locations(_) => Page::Locations,
            ActiveView::Search(_) => Page::Search,
        }
    }
}

/// Navigation shell: one router, one live view
///
/// Switching pages drops the previous view, which cancels whatever it still
/// had running.
pub struct App {
    router: Router,
    services: Services,
    capture: CaptureConfig,
    search_limit: Option<usize>,
    locale: Locale,
    view: ActiveView,
}

impl App {
    pub fn new(config: &Config, services: Services) -> Self {
        Self::with_initial_path(config, services, Page::default().path())
    }

    pub fn with_initial_path(config: &Config, services: Services, path: &str) -> Self {
        let router = Router::with_initial_path(path);
        let locale = config.ui.locale;
        let view = Self::activate(
            router.current(),
            &services,
            &config.capture,
            config.search.limit,
            locale.messages(),
        );

        Self {
            router,
            services,
            capture: config.capture.clone(),
            search_limit: config.search.limit,
            locale,
            view,
        }
    }

    fn activate(
        page: Page,
        services: &Services,
        capture: &CaptureConfig,
        search_limit: Option<usize>,
        messages: &'static Messages,
    ) -> ActiveView {
        info!("Activating {} page", page);

        match page {
            Page::Record => {
                let mut flow = CaptureFlow::new(
                    Arc::clone(&services.api),
                    Arc::clone(&services.audio),
                    capture.clone(),
                    messages,
                );
                flow.activate(Arc::clone(&services.locator));
                ActiveView::Record(flow)
            }
            Page::History => ActiveView::History(HistoryView::activate(
                Arc::clone(&services.api),
                messages,
            )),
            Page::Locations => ActiveView::Locations(LocationsView::activate(
                Arc::clone(&services.api),
                messages,
            )),
            Page::Search => ActiveView::Search(SearchView::new(
                Arc::clone(&services.api),
                Arc::clone(&services.scorer),
                messages,
                search_limit,
            )),
        }
    }

    pub fn page(&self) -> Page {
        self.router.current()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ActiveView {
        &mut self.view
    }

    /// Follow an in-app link. Returns `None` if the href is not in-app.
    pub fn open(&mut self, href: &str) -> Option<Page> {
        let page = self.router.intercept(href)?;
        self.show(page);
        Some(page)
    }

    pub fn back(&mut self) -> Option<Page> {
        let page = self.router.back()?;
        self.show(page);
        Some(page)
    }

    fn show(&mut self, page: Page) {
        if self.view.page() == page {
            return;
        }

        self.view = Self::activate(
            page,
            &self.services,
            &self.capture,
            self.search_limit,
            self.locale.messages(),
        );
    }

    /// Wait for the active view's outstanding fetch, if any
    pub async fn settle(&mut self) {
        match &mut self.view {
            ActiveView::History(view) => {
                view.settled().await;
            }
            ActiveView::Locations(view) => {
                view.settled().await;
            }
            ActiveView::Search(view) => {
                view.settled().await;
            }
            ActiveView::Record(_) => {}
        }
    }

    /// Display text of the active page
    pub fn render(&self) -> String {
        let messages = self.messages();
        let body = match &self.view {
            ActiveView::Record(flow) => render::record(&flow.snapshot(), messages),
            ActiveView::History(view) => render::history(&view.state(), messages, self.locale),
            ActiveView::Locations(view) => {
                render::locations(&view.state(), messages, self.locale)
            }
            ActiveView::Search(view) => render::search(&view.state(), messages, self.locale),
        };

        format!(
            "{}\n{}\n\n{}",
            render::navigation(self.page(), messages),
            self.page().title(messages),
            body
        )
    }
}
