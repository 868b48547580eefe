use anyhow::Result;
use tracing::{info, warn};

use super::commands::Command;
use crate::forum::auth::AuthKind;
use crate::forum::route::Route;
use crate::forum::thread::{TopicThread, LOGIN_PROMPT};
use crate::forum::ActiveScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Search,
    Compose,
    Command,
    Dialog,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Normal => "NORMAL",
            AppMode::Search => "SEARCH",
            AppMode::Compose => "COMPOSE",
            AppMode::Command => "COMMAND",
            AppMode::Dialog => "FORM",
        }
    }
}

pub struct AppState {
    pub mode: AppMode,
    pub screen: ActiveScreen,
    pub last_key: Option<char>,

    pub command_input: String,
    pub status_message: String,
    pub clock: String,
}

impl AppState {
    pub fn new(route: &Route) -> Self {
        Self {
            mode: AppMode::Normal,
            screen: ActiveScreen::mount(route),
            last_key: None,
            command_input: String::new(),
            status_message: String::new(),
            clock: String::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Replace the current screen with a freshly mounted one for `route`.
    pub fn navigate(&mut self, route: &Route) {
        info!("Navigating to {}", route);
        self.screen = ActiveScreen::mount(route);
        self.mode = AppMode::Normal;
        self.last_key = None;
        self.status_message.clear();
    }

    pub fn go_home(&mut self) {
        self.navigate(&Route::List);
    }

    pub fn open_topic(&mut self, id: &str) {
        self.navigate(&Route::Topic(id.to_string()));
    }

    pub fn open_selected_topic(&mut self) {
        let route = match &self.screen {
            ActiveScreen::List(list) => list.open_selected(),
            ActiveScreen::Topic(_) => None,
        };
        if let Some(route) = route {
            self.navigate(&route);
        }
    }

    pub fn start_search(&mut self) {
        if matches!(self.screen, ActiveScreen::List(_)) {
            self.mode = AppMode::Search;
        }
    }

    /// Enter compose mode if the detail screen's session allows it.
    pub fn start_compose(&mut self) {
        let Some(thread) = self.thread() else {
            return;
        };
        if thread.is_logged_in {
            self.mode = AppMode::Compose;
        } else {
            self.set_status_message(LOGIN_PROMPT);
        }
    }

    pub fn open_auth_dialog(&mut self, kind: AuthKind) {
        match &mut self.screen {
            ActiveScreen::List(list) if !list.is_logged_in => {
                list.open_auth(kind);
                self.mode = AppMode::Dialog;
            }
            ActiveScreen::List(_) => self.set_status_message("Already logged in"),
            ActiveScreen::Topic(_) => self.set_status_message("Login is available on the topic list"),
        }
    }

    pub fn close_auth_dialog(&mut self) {
        if let ActiveScreen::List(list) = &mut self.screen {
            list.close_auth();
        }
        self.mode = AppMode::Normal;
    }

    pub fn submit_auth_dialog(&mut self) {
        if let ActiveScreen::List(list) = &mut self.screen {
            list.submit_auth();
            self.set_status_message("Logged in");
        }
        self.mode = AppMode::Normal;
    }

    pub fn thread(&self) -> Option<&TopicThread> {
        match &self.screen {
            ActiveScreen::Topic(detail) => detail.thread(),
            ActiveScreen::List(_) => None,
        }
    }

    pub fn thread_mut(&mut self) -> Option<&mut TopicThread> {
        match &mut self.screen {
            ActiveScreen::Topic(detail) => detail.thread_mut(),
            ActiveScreen::List(_) => None,
        }
    }

    // Navigation methods
    pub fn move_up(&mut self) {
        match &mut self.screen {
            ActiveScreen::List(list) => list.move_up(),
            ActiveScreen::Topic(detail) => {
                if let Some(thread) = detail.thread_mut() {
                    thread.move_up();
                }
            }
        }
    }

    pub fn move_down(&mut self) {
        match &mut self.screen {
            ActiveScreen::List(list) => list.move_down(),
            ActiveScreen::Topic(detail) => {
                if let Some(thread) = detail.thread_mut() {
                    thread.move_down();
                }
            }
        }
    }

    pub fn go_to_top(&mut self) {
        match &mut self.screen {
            ActiveScreen::List(list) => list.go_to_top(),
            ActiveScreen::Topic(detail) => {
                if let Some(thread) = detail.thread_mut() {
                    thread.go_to_top();
                }
            }
        }
    }

    pub fn go_to_bottom(&mut self) {
        match &mut self.screen {
            ActiveScreen::List(list) => list.go_to_bottom(),
            ActiveScreen::Topic(detail) => {
                if let Some(thread) = detail.thread_mut() {
                    thread.go_to_bottom();
                }
            }
        }
    }

    pub fn next_tab(&mut self) {
        if let ActiveScreen::List(list) = &mut self.screen {
            list.next_tab();
        }
    }

    pub fn previous_tab(&mut self) {
        if let ActiveScreen::List(list) = &mut self.screen {
            list.previous_tab();
        }
    }

    pub fn toggle_selected_like(&mut self) {
        if let Some(thread) = self.thread_mut() {
            thread.toggle_selected_like();
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Open(id) => {
                self.open_topic(&id);
                Ok(())
            }
            Command::Back => {
                self.go_home();
                Ok(())
            }
            Command::Search(query) => {
                match &mut self.screen {
                    ActiveScreen::List(list) => list.set_search(&query),
                    ActiveScreen::Topic(_) => self.set_status_message("Search is available on the topic list"),
                }
                Ok(())
            }
            Command::Tab(tab) => {
                match &mut self.screen {
                    ActiveScreen::List(list) => list.set_tab(tab),
                    ActiveScreen::Topic(_) => self.set_status_message("Tabs are available on the topic list"),
                }
                Ok(())
            }
            Command::Login => {
                self.open_auth_dialog(AuthKind::Login);
                Ok(())
            }
            Command::Register => {
                self.open_auth_dialog(AuthKind::Register);
                Ok(())
            }
            Command::Like(id) => {
                match self.thread_mut() {
                    Some(thread) => {
                        if !thread.toggle_like(id) {
                            info!("Ignoring like for unknown comment {}", id);
                        }
                    }
                    None => self.set_status_message("No comments on this screen"),
                }
                Ok(())
            }
            Command::Comment(text) => {
                match self.thread().map(|thread| thread.is_logged_in) {
                    Some(true) => {
                        let posted = self.thread_mut().and_then(|thread| thread.add_comment(&text));
                        if posted.is_some() {
                            self.set_status_message("Comment posted");
                        }
                    }
                    Some(false) => self.set_status_message(LOGIN_PROMPT),
                    None => self.set_status_message("No comments on this screen"),
                }
                Ok(())
            }
            Command::Quit => Ok(()),
            Command::Unknown(msg) => {
                warn!("{}", msg);
                self.set_status_message(&msg);
                Ok(())
            }
        }
    }

    pub fn set_status_message(&mut self, msg: &str) {
        self.status_message = msg.to_string();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Route::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forum::listing::TopicTab;

    fn list_search(state: &AppState) -> &str {
        match &state.screen {
            ActiveScreen::List(list) => &list.search_query,
            ActiveScreen::Topic(_) => panic!("expected list screen"),
        }
    }

    #[test]
    fn test_open_and_back_resets_list() {
        let mut state = AppState::default();
        state.handle_command(Command::Search("дизайн".to_string())).unwrap();
        assert_eq!(list_search(&state), "дизайн");

        state.open_selected_topic();
        assert_eq!(state.route(), Route::Topic("4".to_string()));
        // Topic 4 has no detail record.
        assert!(state.thread().is_none());

        state.handle_command(Command::Back).unwrap();
        assert_eq!(state.route(), Route::List);
        assert_eq!(list_search(&state), "");
    }

    #[test]
    fn test_login_flag_does_not_reach_detail_screen() {
        let mut state = AppState::default();
        state.handle_command(Command::Login).unwrap();
        assert_eq!(state.mode, AppMode::Dialog);
        state.submit_auth_dialog();
        match &state.screen {
            ActiveScreen::List(list) => assert!(list.is_logged_in),
            ActiveScreen::Topic(_) => panic!("expected list screen"),
        }

        state.handle_command(Command::Open("1".to_string())).unwrap();
        assert!(!state.thread().unwrap().is_logged_in);

        state.start_compose();
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.status_message, LOGIN_PROMPT);
    }

    #[test]
    fn test_comment_command_requires_login() {
        let mut state = AppState::new(&Route::topic(1));
        state.handle_command(Command::Comment("Hello".to_string())).unwrap();
        assert_eq!(state.thread().unwrap().comments.len(), 3);
        assert_eq!(state.status_message, LOGIN_PROMPT);

        state.thread_mut().unwrap().is_logged_in = true;
        state.handle_command(Command::Comment("Hello".to_string())).unwrap();
        assert_eq!(state.thread().unwrap().comments.len(), 4);

        state.handle_command(Command::Comment("   ".to_string())).unwrap();
        assert_eq!(state.thread().unwrap().comments.len(), 4);
    }

    #[test]
    fn test_like_command() {
        let mut state = AppState::new(&Route::topic(2));
        state.handle_command(Command::Like(2)).unwrap();
        let liked = &state.thread().unwrap().comments[1];
        assert_eq!((liked.is_liked, liked.likes), (true, 8));

        state.handle_command(Command::Like(99)).unwrap();
        assert_eq!(state.thread().unwrap().comments[1].likes, 8);
    }

    #[test]
    fn test_list_only_commands_on_detail() {
        let mut state = AppState::new(&Route::topic(1));
        state.handle_command(Command::Tab(TopicTab::Hot)).unwrap();
        assert!(!state.status_message.is_empty());
        state.handle_command(Command::Login).unwrap();
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_unknown_command_sets_status() {
        let mut state = AppState::default();
        state.handle_command(Command::parse("frobnicate")).unwrap();
        assert_eq!(state.status_message, "Unknown command: frobnicate");
    }
}
