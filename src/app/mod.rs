pub mod commands;
pub mod events;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::forum::auth::AuthKind;
use crate::forum::route::Route;
use crate::forum::ActiveScreen;
use crate::ui::UI;
use commands::Command;
use events::{AppEvent, InputEvent};
use state::{AppMode, AppState};

pub struct App {
    state: AppState,
    ui: UI,
    config: Config,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, route: &Route) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut state = AppState::new(route);
        state.set_status_message("Press ':' for commands, '/' to search, q to quit");

        Self {
            state,
            ui: UI::new(&config.ui.theme),
            config,
            event_rx,
            event_tx,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.spawn_input_handler();
        let result = self.event_loop(&mut terminal).await;

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    fn spawn_input_handler(&self) {
        let event_tx = self.event_tx.clone();
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        tokio::spawn(async move {
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(event) = event::read() {
                        let input = match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key(key)),
                            Event::Mouse(mouse) => Some(InputEvent::Mouse(mouse)),
                            Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(input) = input {
                            if event_tx.send(AppEvent::Input(input)).is_err() {
                                break;
                            }
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| {
                if let Err(e) = self.ui.render(f, &self.state) {
                    error!("Failed to render UI: {}", e);
                }
            })?;

            match self.event_rx.recv().await {
                Some(event) => self.handle_event(event)?,
                None => break,
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Input(input_event) => {
                debug!("Handling event: {:?}", input_event);
                self.handle_input_event(input_event)?;
            }
            AppEvent::Tick => {
                self.state.clock = chrono::Local::now().format("%H:%M:%S").to_string();
            }
        }

        Ok(())
    }

    fn handle_input_event(&mut self, input_event: InputEvent) -> Result<()> {
        match input_event {
            InputEvent::Key(key) => match self.state.mode {
                AppMode::Normal => self.handle_normal_mode_key(key),
                AppMode::Search => self.handle_search_mode_key(key),
                AppMode::Compose => self.handle_compose_mode_key(key),
                AppMode::Command => self.handle_command_mode_key(key)?,
                AppMode::Dialog => self.handle_dialog_key(key),
            },
            InputEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.state.move_up(),
                MouseEventKind::ScrollDown => self.state.move_down(),
                _ => {}
            },
            InputEvent::Resize(w, h) => {
                info!("Terminal resized to {}x{}", w, h);
            }
        }

        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key: KeyEvent) {
        let vim = self.config.ui.vim_mode;
        let on_list = matches!(self.state.screen, ActiveScreen::List(_));
        let not_found = matches!(&self.state.screen, ActiveScreen::Topic(detail) if detail.is_not_found());

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(':') => {
                self.state.mode = AppMode::Command;
                self.state.command_input.clear();
            }
            KeyCode::Char('/') | KeyCode::Char('i') => {
                if on_list {
                    self.state.start_search();
                } else {
                    self.state.start_compose();
                }
            }
            KeyCode::Char('j') if vim => self.state.move_down(),
            KeyCode::Down => self.state.move_down(),
            KeyCode::Char('k') if vim => self.state.move_up(),
            KeyCode::Up => self.state.move_up(),
            KeyCode::Char('g') if vim => {
                // 'gg' jumps to the top
                if self.state.last_key == Some('g') {
                    self.state.go_to_top();
                    self.state.last_key = None;
                } else {
                    self.state.last_key = Some('g');
                }
                return;
            }
            KeyCode::Home => self.state.go_to_top(),
            KeyCode::Char('G') if vim => self.state.go_to_bottom(),
            KeyCode::End => self.state.go_to_bottom(),
            KeyCode::Tab if on_list => self.state.next_tab(),
            KeyCode::BackTab if on_list => self.state.previous_tab(),
            KeyCode::Enter if on_list => self.state.open_selected_topic(),
            KeyCode::Char('L') if on_list => self.state.open_auth_dialog(AuthKind::Login),
            KeyCode::Char('R') if on_list => self.state.open_auth_dialog(AuthKind::Register),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left if !on_list => self.state.go_home(),
            KeyCode::Char('h') if vim && !on_list => self.state.go_home(),
            KeyCode::Enter if not_found => self.state.go_home(),
            KeyCode::Char('l') | KeyCode::Char(' ') if !on_list => self.state.toggle_selected_like(),
            _ => {}
        }
        self.state.last_key = None;
    }

    fn handle_search_mode_key(&mut self, key: KeyEvent) {
        let ActiveScreen::List(list) = &mut self.state.screen else {
            self.state.mode = AppMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.state.mode = AppMode::Normal;
            }
            KeyCode::Char(c) => list.push_search_char(c),
            KeyCode::Backspace => list.pop_search_char(),
            KeyCode::Down => list.move_down(),
            KeyCode::Up => list.move_up(),
            _ => {}
        }
    }

    fn handle_compose_mode_key(&mut self, key: KeyEvent) {
        let Some(thread) = self.state.thread_mut() else {
            self.state.mode = AppMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.state.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                if thread.submit_draft().is_some() {
                    self.state.mode = AppMode::Normal;
                    self.state.set_status_message("Comment posted");
                }
            }
            KeyCode::Char(c) => thread.push_draft_char(c),
            KeyCode::Backspace => thread.pop_draft_char(),
            _ => {}
        }
    }

    fn handle_command_mode_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state.mode = AppMode::Normal;
                self.state.command_input.clear();
            }
            KeyCode::Char(c) => {
                self.state.command_input.push(c);
            }
            KeyCode::Backspace => {
                self.state.command_input.pop();
            }
            KeyCode::Enter => {
                let command = std::mem::take(&mut self.state.command_input);
                self.state.mode = AppMode::Normal;
                self.execute_command(&command)?;
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let ActiveScreen::List(list) = &mut self.state.screen else {
            self.state.mode = AppMode::Normal;
            return;
        };
        let Some(form) = list.auth_form.as_mut() else {
            self.state.mode = AppMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc => self.state.close_auth_dialog(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.on_last_field() {
                    self.state.submit_auth_dialog();
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        }
    }

    fn execute_command(&mut self, input: &str) -> Result<()> {
        let cmd = Command::parse(input);
        debug!("Executing command: {:?}", cmd);
        match cmd {
            Command::Quit => {
                self.should_quit = true;
                Ok(())
            }
            other => self.state.handle_command(other),
        }
    }
}
