use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use super::auth::{AuthForm, AuthKind};
use super::fixtures;
use super::icon::Icon;
use super::models::{Category, SiteStats, Topic};
use super::route::Route;

/// Size of the "new" tab: a fixed prefix of the filtered list.
pub const NEW_TAB_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicTab {
    #[default]
    All,
    Hot,
    New,
}

impl TopicTab {
    pub const ALL: [TopicTab; 3] = [TopicTab::All, TopicTab::Hot, TopicTab::New];

    pub fn title(self) -> &'static str {
        match self {
            TopicTab::All => "Все темы",
            TopicTab::Hot => "Популярное",
            TopicTab::New => "Новое",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            TopicTab::All => Icon::MessageSquare,
            TopicTab::Hot => Icon::Flame,
            TopicTab::New => Icon::Sparkles,
        }
    }

    pub fn index(self) -> usize {
        match self {
            TopicTab::All => 0,
            TopicTab::Hot => 1,
            TopicTab::New => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            TopicTab::All => TopicTab::Hot,
            TopicTab::Hot => TopicTab::New,
            TopicTab::New => TopicTab::All,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            TopicTab::All => TopicTab::New,
            TopicTab::Hot => TopicTab::All,
            TopicTab::New => TopicTab::Hot,
        }
    }
}

impl FromStr for TopicTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TopicTab::All),
            "hot" => Ok(TopicTab::Hot),
            "new" => Ok(TopicTab::New),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Topics whose title or category contains `query`, ignoring case, in
/// source order. An empty query keeps everything.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<&'a Topic> {
    let needle = query.to_lowercase();
    topics
        .iter()
        .filter(|topic| {
            topic.title.to_lowercase().contains(&needle)
                || topic.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The part of an already filtered list shown under `tab`.
pub fn tab_view<'a>(filtered: &[&'a Topic], tab: TopicTab) -> Vec<&'a Topic> {
    match tab {
        TopicTab::All => filtered.to_vec(),
        TopicTab::Hot => filtered.iter().copied().filter(|t| t.is_hot).collect(),
        TopicTab::New => filtered.iter().copied().take(NEW_TAB_LEN).collect(),
    }
}

/// State of the topic list screen. Built fresh from the fixtures each time
/// the list is entered.
#[derive(Debug, Clone)]
pub struct TopicListScreen {
    topics: Vec<Topic>,
    categories: Vec<Category>,
    stats: SiteStats,

    pub search_query: String,
    pub active_tab: TopicTab,
    pub is_logged_in: bool,

    pub selected_index: usize,
    pub auth_form: Option<AuthForm>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot<'a> {
    pub search_query: &'a str,
    pub active_tab: TopicTab,
    pub is_logged_in: bool,
    pub topics: Vec<&'a Topic>,
    pub categories: &'a [Category],
    pub stats: SiteStats,
}

impl TopicListScreen {
    pub fn new() -> Self {
        Self {
            topics: fixtures::topics(),
            categories: fixtures::categories(),
            stats: fixtures::site_stats(),
            search_query: String::new(),
            active_tab: TopicTab::All,
            is_logged_in: false,
            selected_index: 0,
            auth_form: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn stats(&self) -> SiteStats {
        self.stats
    }

    pub fn filtered(&self) -> Vec<&Topic> {
        filter_topics(&self.topics, &self.search_query)
    }

    /// Topics under the active tab.
    pub fn visible(&self) -> Vec<&Topic> {
        tab_view(&self.filtered(), self.active_tab)
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.visible().get(self.selected_index).copied()
    }

    /// Route of the highlighted topic.
    pub fn open_selected(&self) -> Option<Route> {
        self.selected_topic().map(|topic| Route::topic(topic.id))
    }

    // Search
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.clamp_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.clamp_selection();
    }

    // Tabs
    pub fn set_tab(&mut self, tab: TopicTab) {
        debug!("Switching topic tab to {:?}", tab);
        self.active_tab = tab;
        self.selected_index = 0;
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.active_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.set_tab(self.active_tab.previous());
    }

    // Navigation
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index < self.max_index() {
            self.selected_index += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.selected_index = self.max_index();
    }

    fn max_index(&self) -> usize {
        self.visible().len().saturating_sub(1)
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.max_index());
    }

    // Session
    pub fn open_auth(&mut self, kind: AuthKind) {
        self.auth_form = Some(AuthForm::new(kind));
    }

    pub fn close_auth(&mut self) {
        self.auth_form = None;
    }

    /// Submit whichever dialog is open. Any input is accepted.
    pub fn submit_auth(&mut self) {
        if let Some(form) = self.auth_form.take() {
            info!("Session started via {:?} dialog", form.kind);
            self.is_logged_in = true;
        }
    }

    pub fn snapshot(&self) -> ListSnapshot<'_> {
        ListSnapshot {
            search_query: &self.search_query,
            active_tab: self.active_tab,
            is_logged_in: self.is_logged_in,
            topics: self.visible(),
            categories: &self.categories,
            stats: self.stats,
        }
    }
}

impl Default for TopicListScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(topics: &[&Topic]) -> Vec<u32> {
        topics.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_all_in_order() {
        let topics = fixtures::topics();
        assert_eq!(ids(&filter_topics(&topics, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_matches_title_or_category_case_insensitively() {
        let topics = fixtures::topics();
        for query in ["", "форум", "ФОРУМ", "дизайн", "ui/ux", "разработка", "zzz", "а", "?"] {
            let filtered = filter_topics(&topics, query);
            let q = query.to_lowercase();
            let expected: Vec<u32> = topics
                .iter()
                .filter(|t| t.title.to_lowercase().contains(&q) || t.category.to_lowercase().contains(&q))
                .map(|t| t.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "query {query:?}");

            let mut sorted = ids(&filtered);
            sorted.sort_unstable();
            assert_eq!(ids(&filtered), sorted, "order preserved for {query:?}");
        }
    }

    #[test]
    fn test_category_match() {
        let topics = fixtures::topics();
        // Neither word appears in a title.
        assert_eq!(ids(&filter_topics(&topics, "ОБУЧЕНИЕ")), vec![3]);
        assert_eq!(ids(&filter_topics(&topics, "новости")), vec![1]);
    }

    #[test]
    fn test_no_match() {
        let topics = fixtures::topics();
        assert!(filter_topics(&topics, "kubernetes").is_empty());
    }

    #[test]
    fn test_hot_is_ordered_subset_of_filtered() {
        let topics = fixtures::topics();
        for query in ["", "о", "дизайн", "как"] {
            let filtered = filter_topics(&topics, query);
            let hot = tab_view(&filtered, TopicTab::Hot);
            assert!(hot.iter().all(|t| t.is_hot));

            let positions: Vec<usize> = hot
                .iter()
                .map(|h| filtered.iter().position(|f| f.id == h.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query:?}");
        }
        assert_eq!(ids(&tab_view(&filter_topics(&topics, ""), TopicTab::Hot)), vec![1, 2, 4]);
    }

    #[test]
    fn test_new_tab_is_prefix() {
        let topics = fixtures::topics();
        let all = filter_topics(&topics, "");
        assert_eq!(ids(&tab_view(&all, TopicTab::New)), vec![1, 2]);

        let one = filter_topics(&topics, "обучение");
        assert_eq!(ids(&tab_view(&one, TopicTab::New)), vec![3]);
    }

    #[test]
    fn test_tab_parse_and_cycle() {
        assert_eq!("hot".parse::<TopicTab>().unwrap(), TopicTab::Hot);
        assert!("popular".parse::<TopicTab>().is_err());
        assert_eq!(TopicTab::New.next(), TopicTab::All);
        assert_eq!(TopicTab::All.previous(), TopicTab::New);
    }

    #[test]
    fn test_login_and_register_accept_anything() {
        let mut screen = TopicListScreen::new();
        screen.open_auth(AuthKind::Login);
        screen.submit_auth();
        assert!(screen.is_logged_in);
        assert!(screen.auth_form.is_none());

        let mut screen = TopicListScreen::new();
        screen.open_auth(AuthKind::Register);
        screen.submit_auth();
        assert!(screen.is_logged_in);
    }

    #[test]
    fn test_cancel_keeps_logged_out() {
        let mut screen = TopicListScreen::new();
        screen.open_auth(AuthKind::Login);
        screen.close_auth();
        screen.submit_auth();
        assert!(!screen.is_logged_in);
    }

    #[test]
    fn test_selection_is_clamped_by_search() {
        let mut screen = TopicListScreen::new();
        screen.go_to_bottom();
        assert_eq!(screen.selected_index, 3);
        screen.set_search("обучение");
        assert_eq!(screen.selected_index, 0);
        assert_eq!(screen.open_selected(), Some(Route::topic(3)));

        screen.set_search("kubernetes");
        assert_eq!(screen.open_selected(), None);
    }

    #[test]
    fn test_search_editing() {
        let mut screen = TopicListScreen::new();
        for c in "диз".chars() {
            screen.push_search_char(c);
        }
        assert_eq!(ids(&screen.visible()), vec![4]);
        screen.pop_search_char();
        screen.pop_search_char();
        screen.pop_search_char();
        assert_eq!(screen.visible().len(), 4);
    }

    #[test]
    fn test_tab_switch_resets_selection() {
        let mut screen = TopicListScreen::new();
        screen.move_down();
        screen.next_tab();
        assert_eq!(screen.active_tab, TopicTab::Hot);
        assert_eq!(screen.selected_index, 0);
        screen.go_to_bottom();
        assert_eq!(screen.open_selected(), Some(Route::topic(4)));
    }
}
