use crate::forum::listing::TopicTab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Back,
    Search(String),
    Tab(TopicTab),
    Login,
    Register,
    Like(u32),
    Comment(String),
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let input = input.trim_start();
        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (input, ""),
        };

        match name {
            "" => Command::Unknown("Empty command".to_string()),
            "open" | "o" => {
                let id = rest.trim();
                if id.is_empty() {
                    return Command::Unknown("Usage: open <topic-id>".to_string());
                }
                Command::Open(id.to_string())
            }
            "back" | "home" => Command::Back,
            "search" | "s" => Command::Search(rest.to_string()),
            "tab" => match rest.trim().parse() {
                Ok(tab) => Command::Tab(tab),
                Err(_) => Command::Unknown("Usage: tab all|hot|new".to_string()),
            },
            "login" => Command::Login,
            "register" => Command::Register,
            "like" => match rest.trim().parse() {
                Ok(id) => Command::Like(id),
                Err(_) => Command::Unknown("Usage: like <comment-id>".to_string()),
            },
            "comment" => Command::Comment(rest.to_string()),
            "q" | "quit" => Command::Quit,
            _ => Command::Unknown(format!("Unknown command: {}", name)),
        }
    }
}
