pub mod screens;
pub mod theme;

use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::{AppMode, AppState};
use crate::forum::icon::Icon;
use crate::forum::ActiveScreen;
use theme::Theme;

pub struct UI {
    theme: Theme,
}

impl UI {
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(f.size());

        self.render_header(f, chunks[0], state);

        match &state.screen {
            ActiveScreen::List(list) => {
                screens::topics::render_topic_list(f, chunks[1], list, &self.theme, state.mode == AppMode::Search)?;
                if let Some(form) = &list.auth_form {
                    screens::auth::render_auth_dialog(f, f.size(), form, &self.theme)?;
                }
            }
            ActiveScreen::Topic(detail) => {
                screens::topic_detail::render_topic_detail(
                    f,
                    chunks[1],
                    detail,
                    &self.theme,
                    state.mode == AppMode::Compose,
                )?;
            }
        }

        self.render_status_bar(f, chunks[2], state);

        if state.mode == AppMode::Command {
            self.render_command_input(f, f.size(), state);
        }

        Ok(())
    }

    fn render_header(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        let mut brand = Vec::new();
        if let ActiveScreen::Topic(_) = state.screen {
            brand.push(Span::styled(format!("{} ", Icon::ArrowLeft.glyph()), self.theme.muted()));
        }
        brand.push(Span::styled(format!("{} ForumPro", Icon::MessageSquare.glyph()), self.theme.title()));

        let left = Paragraph::new(Line::from(brand))
            .block(Block::default().borders(Borders::ALL).border_style(self.theme.border(false)));
        f.render_widget(left, chunks[0]);

        let session = match &state.screen {
            ActiveScreen::List(list) if list.is_logged_in => Line::from(vec![
                Span::styled(format!("{} ", Icon::User.glyph()), self.theme.muted()),
                Span::styled(" ВЫ ", Style::default().bg(self.theme.accent).add_modifier(Modifier::BOLD)),
            ]),
            ActiveScreen::List(_) => Line::from(vec![
                Span::styled("L", self.theme.title()),
                Span::raw(" Вход  "),
                Span::styled("R", self.theme.title()),
                Span::raw(" Регистрация"),
            ]),
            ActiveScreen::Topic(_) => Line::from(vec![
                Span::styled("Esc", self.theme.title()),
                Span::raw(" Вернуться на главную"),
            ]),
        };

        let right = Paragraph::new(session)
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL).border_style(self.theme.border(false)));
        f.render_widget(right, chunks[1]);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let help_text = match state.mode {
            AppMode::Normal => match &state.screen {
                ActiveScreen::List(_) => "q:quit :cmd /:search Tab:tab Enter:open",
                ActiveScreen::Topic(_) => "q:quit :cmd j/k:move l:like Esc:back",
            },
            AppMode::Search => "ESC/Enter:done",
            AppMode::Compose => "ESC:cancel Enter:send",
            AppMode::Command => "ESC:cancel Enter:exec",
            AppMode::Dialog => "ESC:cancel Tab:field Enter:submit",
        };
        let right_content = format!("{} {}", help_text, state.clock);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(right_content.chars().count() as u16 + 2),
            ])
            .split(area);

        let left_content = format!(
            " {} | Mode: {} | {}",
            state.route(),
            state.mode.label(),
            state.status_message
        );

        let left_paragraph = Paragraph::new(left_content)
            .style(self.theme.text())
            .block(Block::default().borders(Borders::ALL).border_style(self.theme.border(false)));
        f.render_widget(left_paragraph, chunks[0]);

        let right_paragraph = Paragraph::new(right_content)
            .style(Style::default().fg(self.theme.secondary))
            .block(Block::default().borders(Borders::ALL).border_style(self.theme.border(false)));
        f.render_widget(right_paragraph, chunks[1]);
    }

    fn render_command_input(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = centered_rect(60, 3, area);

        f.render_widget(Clear, popup_area);

        let input_text = format!(":{}", state.command_input);
        let input_paragraph = Paragraph::new(input_text)
            .style(Style::default().fg(self.theme.pinned))
            .block(Block::default().borders(Borders::ALL).title("Command"));

        f.render_widget(input_paragraph, popup_area);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new("default")
    }
}

/// A `percent_x` wide, `height` rows tall rectangle centred in `r`.
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let row = Rect::new(r.x, r.y + (r.height - height) / 2, r.width, height);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(row)[1]
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::{Frame, Terminal};

    /// Draw with `render` into an off-screen terminal and return its rows.
    pub fn draw_lines(width: u16, height: u16, render: impl FnOnce(&mut Frame)) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(render).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect())
            .collect()
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
