pub mod auth;
pub mod fixtures;
pub mod icon;
pub mod listing;
pub mod models;
pub mod route;
pub mod thread;

use serde::Serialize;

use listing::TopicListScreen;
use route::Route;
use thread::TopicDetailScreen;

/// The screen currently mounted. Switching routes drops the old screen and
/// builds the new one from the fixtures, so no state carries over.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ActiveScreen {
    List(#[serde(serialize_with = "serialize_list")] TopicListScreen),
    Topic(TopicDetailScreen),
}

fn serialize_list<S: serde::Serializer>(screen: &TopicListScreen, serializer: S) -> Result<S::Ok, S::Error> {
    screen.snapshot().serialize(serializer)
}

impl ActiveScreen {
    pub fn mount(route: &Route) -> Self {
        match route {
            Route::List => ActiveScreen::List(TopicListScreen::new()),
            Route::Topic(raw) => ActiveScreen::Topic(TopicDetailScreen::open(raw)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ActiveScreen::List(_) => Route::List,
            ActiveScreen::Topic(screen) => match &screen.view {
                thread::DetailView::Thread(thread) => Route::topic(thread.id),
                thread::DetailView::NotFound { requested } => Route::Topic(requested.clone()),
            },
        }
    }
}
