use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::forum::auth::AuthForm;
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

pub fn render_auth_dialog(f: &mut Frame, area: Rect, form: &AuthForm, theme: &Theme) -> Result<()> {
    // Title, fields, submit and help rows plus the outer border.
    let height = 4 + form.fields.len() as u16 * 3 + 3 + 2;
    let popup_area = centered_rect(50, height, area);

    f.render_widget(Clear, popup_area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .title(format!(" {} ", form.kind.title()));
    let inner = outer.inner(popup_area);
    f.render_widget(outer, popup_area);

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(form.fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1)); // Submit
    constraints.push(Constraint::Min(0)); // Help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(form.kind.title(), theme.title())),
        Line::from(Span::styled(form.kind.description(), theme.muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(header, chunks[0]);

    for (i, field) in form.fields.iter().enumerate() {
        let is_current = i == form.current_field;

        let content = if field.value.is_empty() {
            Span::styled(field.placeholder, theme.muted())
        } else {
            Span::styled(field.display_value(), theme.text())
        };
        let mut spans = vec![content];
        if is_current {
            spans.push(Span::styled("_", theme.title()));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(is_current))
                .title(field.label),
        );
        f.render_widget(input, chunks[i + 1]);
    }

    let submit_style = if form.on_last_field() {
        theme.selected()
    } else {
        theme.title()
    };
    let submit = Paragraph::new(Span::styled(format!("[ {} ]", form.kind.submit_label()), submit_style))
        .alignment(Alignment::Center);
    f.render_widget(submit, chunks[form.fields.len() + 1]);

    let help = Paragraph::new(Span::styled(
        "Tab/Shift+Tab: Navigate fields, Enter: Submit, Esc: Cancel",
        theme.muted(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[form.fields.len() + 2]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forum::auth::AuthKind;
    use crate::ui::test_support::{contains, draw_lines};

    fn render(form: &AuthForm) -> Vec<String> {
        let theme = Theme::default();
        draw_lines(120, 40, |f| {
            let area = f.size();
            render_auth_dialog(f, area, form, &theme).unwrap();
        })
    }

    #[test]
    fn test_login_dialog_fields() {
        let form = AuthForm::new(AuthKind::Login);
        let lines = render(&form);
        assert!(contains(&lines, "Email"));
        assert!(contains(&lines, "Пароль"));
        assert!(!contains(&lines, "Имя пользователя"));
        assert!(contains(&lines, "your@email.com"));
    }

    #[test]
    fn test_register_dialog_fields() {
        let form = AuthForm::new(AuthKind::Register);
        let lines = render(&form);
        assert!(contains(&lines, "Имя пользователя"));
        assert!(contains(&lines, AuthKind::Register.submit_label()));
    }

    #[test]
    fn test_password_is_masked() {
        let mut form = AuthForm::new(AuthKind::Login);
        form.next_field();
        for c in "hunter2".chars() {
            form.push_char(c);
        }
        let lines = render(&form);
        assert!(contains(&lines, "*******"));
        assert!(!contains(&lines, "hunter2"));
    }
}
