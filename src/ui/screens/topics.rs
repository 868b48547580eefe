use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::forum::icon::Icon;
use crate::forum::listing::{TopicListScreen, TopicTab};
use crate::forum::models::{group_thousands, initials, Topic};
use crate::ui::theme::Theme;

pub fn render_topic_list(
    f: &mut Frame,
    area: Rect,
    list: &TopicListScreen,
    theme: &Theme,
    searching: bool,
) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Topics + sidebar
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled("Добро пожаловать!", theme.title())),
        Line::from(Span::styled(
            "Присоединяйтесь к обсуждениям и делитесь знаниями",
            theme.muted(),
        )),
    ]);
    f.render_widget(greeting, chunks[0]);

    render_search_box(f, chunks[1], list, theme, searching);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(chunks[2]);

    render_topics(f, body[0], list, theme, !searching)?;
    render_sidebar(f, body[1], list, theme)?;

    Ok(())
}

fn render_search_box(f: &mut Frame, area: Rect, list: &TopicListScreen, theme: &Theme, searching: bool) {
    let content = if list.search_query.is_empty() && !searching {
        Line::from(Span::styled("Поиск по темам и постам...", theme.muted()))
    } else {
        let mut spans = vec![Span::styled(list.search_query.as_str(), theme.text())];
        if searching {
            spans.push(Span::styled("_", theme.title()));
        }
        Line::from(spans)
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(searching))
            .title(format!(" {} Поиск ", Icon::Search.glyph())),
    );
    f.render_widget(search, area);
}

fn render_topics(f: &mut Frame, area: Rect, list: &TopicListScreen, theme: &Theme, focused: bool) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = TopicTab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.icon().glyph(), tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border(false)))
        .style(theme.text())
        .highlight_style(theme.tab_active())
        .select(list.active_tab.index());
    f.render_widget(tabs, chunks[0]);

    let visible = list.visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(format!(" {} ", list.active_tab.title()));

    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled("Темы не найдены", theme.muted())).block(block);
        f.render_widget(empty, chunks[1]);
        return Ok(());
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|topic| topic_item(topic, list.active_tab, theme))
        .collect();

    let mut state = ListState::default();
    state.select(Some(list.selected_index));

    let topics = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("▌");
    f.render_stateful_widget(topics, chunks[1], &mut state);

    Ok(())
}

fn topic_item<'a>(topic: &'a Topic, tab: TopicTab, theme: &Theme) -> ListItem<'a> {
    let mut badges = Vec::new();
    match tab {
        TopicTab::All => {
            if topic.is_pinned {
                badges.push(Span::styled(format!("{} Закреплено ", Icon::Pin.glyph()), theme.badge_pinned()));
            }
            if topic.is_hot {
                badges.push(Span::styled(
                    format!("{} Горячая тема ", Icon::TrendingUp.glyph()),
                    theme.badge_hot(),
                ));
            }
        }
        TopicTab::Hot => {
            badges.push(Span::styled(format!("{} Горячее ", Icon::Flame.glyph()), theme.badge_hot()));
        }
        TopicTab::New => {
            badges.push(Span::styled(format!("{} Новое ", Icon::Sparkles.glyph()), theme.badge_pinned()));
        }
    }
    badges.push(Span::styled(format!("[{}]", topic.category), theme.badge_category()));

    let title = Line::from(Span::styled(
        topic.title.as_str(),
        theme.text().add_modifier(Modifier::BOLD),
    ));

    let meta = Line::from(vec![
        Span::styled(format!("{} ", initials(&topic.author)), theme.title()),
        Span::styled(topic.author.as_str(), theme.muted()),
        Span::styled(format!("  {} {}", Icon::MessageSquare.glyph(), topic.replies), theme.muted()),
        Span::styled(format!("  {} {}", Icon::Eye.glyph(), topic.views), theme.muted()),
        Span::styled(format!("  · {}", topic.last_activity), theme.muted()),
    ]);

    ListItem::new(vec![Line::from(badges), title, meta, Line::from("")])
}

fn render_sidebar(f: &mut Frame, area: Rect, list: &TopicListScreen, theme: &Theme) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled("Найдите интересующую тему", theme.muted())),
        Line::from(""),
    ];
    for category in list.categories() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", category.icon.glyph()), theme.title()),
            Span::styled(category.name.as_str(), theme.text().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(category.description.as_str(), theme.muted())));
        lines.push(Line::from(Span::styled(
            format!("  {} тем • {} постов", category.topics_count, category.posts_count),
            theme.muted(),
        )));
    }

    let categories = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(false))
                .title(format!(" {} Категории ", Icon::Grid3x3.glyph())),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(categories, chunks[0]);

    let stats = list.stats();
    let stat_line = |label: &'static str, value: u32| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), theme.muted()),
            Span::styled(group_thousands(value), theme.text().add_modifier(Modifier::BOLD)),
        ])
    };
    let mut online = stat_line("Онлайн сейчас", stats.online);
    online.spans[1].style = online.spans[1].style.fg(theme.success);

    let statistics = Paragraph::new(vec![
        stat_line("Всего тем", stats.topics),
        stat_line("Всего постов", stats.posts),
        stat_line("Пользователей", stats.users),
        online,
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(false))
            .title(format!(" {} Статистика ", Icon::TrendingUp.glyph())),
    );
    f.render_widget(statistics, chunks[1]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{contains, draw_lines};

    fn render(list: &TopicListScreen, searching: bool) -> Vec<String> {
        let theme = Theme::default();
        draw_lines(150, 50, |f| {
            let area = f.size();
            render_topic_list(f, area, list, &theme, searching).unwrap();
        })
    }

    #[test]
    fn test_all_tab_lists_every_topic() {
        let list = TopicListScreen::new();
        let lines = render(&list, false);
        assert!(contains(&lines, "Добро пожаловать на наш форум!"));
        assert!(contains(&lines, "Обсуждение новых функций платформы"));
        assert!(contains(&lines, "Лучшие практики UI/UX дизайна в 2024"));
        assert!(contains(&lines, "Закреплено"));
        assert!(contains(&lines, "Поиск по темам и постам..."));
    }

    #[test]
    fn test_search_narrows_rendered_list() {
        let mut list = TopicListScreen::new();
        list.set_search("оптимиз");
        let lines = render(&list, true);
        assert!(contains(&lines, "Как оптимизировать производительность"));
        assert!(!contains(&lines, "Обсуждение новых функций платформы"));
        assert!(contains(&lines, "оптимиз_"));
    }

    #[test]
    fn test_empty_result() {
        let mut list = TopicListScreen::new();
        list.set_search("kubernetes");
        let lines = render(&list, false);
        assert!(contains(&lines, "Темы не найдены"));
    }

    #[test]
    fn test_hot_tab_badges() {
        let mut list = TopicListScreen::new();
        list.set_tab(TopicTab::Hot);
        let lines = render(&list, false);
        assert!(contains(&lines, "Горячее"));
        assert!(!contains(&lines, "Как оптимизировать"));
    }

    #[test]
    fn test_sidebar() {
        let list = TopicListScreen::new();
        let lines = render(&list, false);
        assert!(contains(&lines, "Категории"));
        assert!(contains(&lines, "Образовательные материалы"));
        assert!(contains(&lines, "234 тем • 5670 постов"));
        assert!(contains(&lines, "13,860"));
        assert!(contains(&lines, "2,847"));
    }
}
