use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::forum::icon::Icon;
use crate::forum::models::{initials, Comment};
use crate::forum::thread::{DetailView, TopicDetailScreen, TopicThread, COMMENT_LIMIT, LOGIN_PROMPT};
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

pub fn render_topic_detail(
    f: &mut Frame,
    area: Rect,
    detail: &TopicDetailScreen,
    theme: &Theme,
    composing: bool,
) -> Result<()> {
    match &detail.view {
        DetailView::NotFound { .. } => render_not_found(f, area, theme),
        DetailView::Thread(thread) => render_thread(f, area, thread, theme, composing)?,
    }
    Ok(())
}

fn render_not_found(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup_area = centered_rect(60, 8, area);

    let text = vec![
        Line::from(Span::styled(
            format!("{} Тема не найдена", Icon::AlertCircle.glyph()),
            theme.title(),
        )),
        Line::from(""),
        Line::from(Span::styled("Запрашиваемая тема не существует", theme.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme.title()),
            Span::styled(" Вернуться на главную", theme.text()),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border(false)));
    f.render_widget(paragraph, popup_area);
}

fn render_thread(f: &mut Frame, area: Rect, thread: &TopicThread, theme: &Theme, composing: bool) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Topic
            Constraint::Min(6),         // Comments
            Constraint::Length(4),      // Composer
        ])
        .split(area);

    render_topic(f, chunks[0], thread, theme);
    render_comments(f, chunks[1], thread, theme, !composing);
    render_composer(f, chunks[2], thread, theme, composing);

    Ok(())
}

fn render_topic(f: &mut Frame, area: Rect, thread: &TopicThread, theme: &Theme) {
    let topic = &thread.topic;

    let mut badges = Vec::new();
    if topic.is_pinned {
        badges.push(Span::styled(format!("{} Закреплено ", Icon::Pin.glyph()), theme.badge_pinned()));
    }
    if topic.is_hot {
        badges.push(Span::styled(format!("{} Горячая тема ", Icon::Flame.glyph()), theme.badge_hot()));
    }
    badges.push(Span::styled(format!("[{}]", topic.category), theme.badge_category()));

    let mut lines = vec![
        Line::from(badges),
        Line::from(Span::styled(
            topic.title.as_str(),
            theme.text().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{} ", initials(&topic.author)), theme.title()),
            Span::styled(topic.author.as_str(), theme.text()),
            Span::styled(format!(" · {}", topic.timestamp), theme.muted()),
            Span::styled(format!("   {} {}", Icon::Eye.glyph(), topic.views), theme.muted()),
            Span::styled(
                format!("  {} {}", Icon::MessageSquare.glyph(), thread.comments.len()),
                theme.muted(),
            ),
        ]),
    ];

    for paragraph in topic.paragraphs() {
        lines.push(Line::from(""));
        lines.extend(paragraph.lines().map(|line| Line::from(Span::styled(line, theme.text()))));
    }

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border(false)))
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}

fn render_comments(f: &mut Frame, area: Rect, thread: &TopicThread, theme: &Theme, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(format!(" {} {} ", Icon::MessageCircle.glyph(), thread.comments_heading()));

    if thread.comments.is_empty() {
        let empty = Paragraph::new(Span::styled("Пока нет комментариев. Будьте первым!", theme.muted()))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let last = thread.comments.len() - 1;
    let items: Vec<ListItem> = thread
        .comments
        .iter()
        .enumerate()
        .map(|(i, comment)| comment_item(comment, theme, i != last))
        .collect();

    let mut state = ListState::default();
    state.select(Some(thread.selected_comment));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut state);
}

fn comment_item<'a>(comment: &'a Comment, theme: &Theme, separated: bool) -> ListItem<'a> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", initials(&comment.author)), theme.title()),
            Span::styled(comment.author.as_str(), theme.text().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}", comment.timestamp), theme.muted()),
        ]),
        Line::from(Span::styled(comment.content.as_str(), theme.text())),
        Line::from(vec![
            Span::styled(format!("{} {}", Icon::Heart.glyph(), comment.likes), theme.like(comment.is_liked)),
            Span::styled(format!("   {} Ответить", Icon::Reply.glyph()), theme.muted()),
        ]),
    ];
    if separated {
        lines.push(Line::from(""));
    }
    ListItem::new(lines)
}

fn render_composer(f: &mut Frame, area: Rect, thread: &TopicThread, theme: &Theme, composing: bool) {
    let block = Block::default().borders(Borders::ALL).border_style(theme.border(composing));

    if !thread.is_logged_in {
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled(LOGIN_PROMPT, theme.muted()),
            Span::styled("  [Вход]", theme.title()),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(prompt, area);
        return;
    }

    let draft = if thread.draft.is_empty() && !composing {
        Line::from(Span::styled("Напишите ваш комментарий...", theme.muted()))
    } else {
        let mut spans = vec![Span::styled(thread.draft.as_str(), theme.text())];
        if composing {
            spans.push(Span::styled("_", theme.title()));
        }
        Line::from(spans)
    };

    let counter = Line::from(vec![
        Span::styled(
            format!("{}/{} символов", thread.draft.chars().count(), COMMENT_LIMIT),
            theme.muted(),
        ),
        Span::styled("   Enter", theme.title()),
        Span::styled(" Отправить", theme.text()),
    ]);

    let composer = Paragraph::new(vec![draft, counter]).block(block.title(" Ваш комментарий "));
    f.render_widget(composer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{contains, draw_lines};

    fn render(detail: &TopicDetailScreen, composing: bool) -> Vec<String> {
        let theme = Theme::default();
        draw_lines(140, 60, |f| {
            let area = f.size();
            render_topic_detail(f, area, detail, &theme, composing).unwrap();
        })
    }

    #[test]
    fn test_topic_with_comments() {
        let detail = TopicDetailScreen::open("1");
        let lines = render(&detail, false);
        assert!(contains(&lines, "Добро пожаловать на наш форум!"));
        assert!(contains(&lines, "Закреплено"));
        assert!(contains(&lines, "Комментарии (3)"));
        assert!(contains(&lines, "DevExpert"));
        assert!(contains(&lines, "Ответить"));
        assert!(contains(&lines, "[Вход]"));
    }

    #[test]
    fn test_heading_follows_new_comment() {
        let mut detail = TopicDetailScreen::open("1");
        detail.thread_mut().unwrap().add_comment("Hello");
        let lines = render(&detail, false);
        assert!(contains(&lines, "Комментарии (4)"));
        assert!(contains(&lines, "только что"));
    }

    #[test]
    fn test_not_found() {
        let detail = TopicDetailScreen::open("999");
        let lines = render(&detail, false);
        assert!(contains(&lines, "Тема не найдена"));
        assert!(contains(&lines, "Вернуться на главную"));
        assert!(!contains(&lines, "Комментарии"));
    }

    #[test]
    fn test_composer_counter() {
        let mut detail = TopicDetailScreen::open("2");
        let thread = detail.thread_mut().unwrap();
        thread.is_logged_in = true;
        for c in "Привет".chars() {
            thread.push_draft_char(c);
        }
        let lines = render(&detail, true);
        assert!(contains(&lines, "Привет_"));
        assert!(contains(&lines, "6/1000 символов"));
        assert!(!contains(&lines, "[Вход]"));
    }

    #[test]
    fn test_empty_thread() {
        let mut detail = TopicDetailScreen::open("2");
        detail.thread_mut().unwrap().comments.clear();
        let lines = render(&detail, false);
        assert!(contains(&lines, "Комментарии (0)"));
        assert!(contains(&lines, "Пока нет комментариев. Будьте первым!"));
    }
}
