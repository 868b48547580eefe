use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    pub fn title(self) -> &'static str {
        match self {
            AuthKind::Login => "Войти в аккаунт",
            AuthKind::Register => "Создать аккаунт",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AuthKind::Login => "Введите свои данные для входа",
            AuthKind::Register => "Зарегистрируйтесь для участия в обсуждениях",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthKind::Login => "Войти",
            AuthKind::Register => "Зарегистрироваться",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub secret: bool,
}

impl FormField {
    fn new(label: &'static str, placeholder: &'static str, secret: bool) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            secret,
        }
    }

    /// Text drawn for the field; secret values are masked.
    pub fn display_value(&self) -> String {
        if self.secret {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Login or registration dialog. Nothing typed here is checked; submitting
/// always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthForm {
    pub kind: AuthKind,
    pub fields: Vec<FormField>,
    pub current_field: usize,
}

impl AuthForm {
    pub fn new(kind: AuthKind) -> Self {
        let fields = match kind {
            AuthKind::Login => vec![
                FormField::new("Email", "your@email.com", false),
                FormField::new("Пароль", "••••••••", true),
            ],
            AuthKind::Register => vec![
                FormField::new("Имя пользователя", "username", false),
                FormField::new("Email", "your@email.com", false),
                FormField::new("Пароль", "••••••••", true),
            ],
        };
        Self {
            kind,
            fields,
            current_field: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + self.fields.len() - 1) % self.fields.len();
    }

    pub fn on_last_field(&self) -> bool {
        self.current_field + 1 == self.fields.len()
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.current_field) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.current_field) {
            field.value.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        assert_eq!(AuthForm::new(AuthKind::Login).fields.len(), 2);
        assert_eq!(AuthForm::new(AuthKind::Register).fields.len(), 3);
    }

    #[test]
    fn test_field_cycling() {
        let mut form = AuthForm::new(AuthKind::Register);
        form.next_field();
        form.next_field();
        assert!(form.on_last_field());
        form.next_field();
        assert_eq!(form.current_field, 0);
        form.prev_field();
        assert_eq!(form.current_field, 2);
    }

    #[test]
    fn test_editing_and_masking() {
        let mut form = AuthForm::new(AuthKind::Login);
        for c in "me@x.io".chars() {
            form.push_char(c);
        }
        form.next_field();
        for c in "пароль".chars() {
            form.push_char(c);
        }
        form.backspace();

        assert_eq!(form.fields[0].display_value(), "me@x.io");
        assert_eq!(form.fields[1].value, "парол");
        assert_eq!(form.fields[1].display_value(), "*****");
    }
}
