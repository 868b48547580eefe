use serde::Serialize;

use super::icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: String,
    pub replies: u32,
    pub views: u32,
    pub last_activity: String,
    pub is_hot: bool,
    pub is_pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: Icon,
    pub topics_count: u32,
    pub posts_count: u32,
    pub description: String,
}

/// Full topic record shown on the detail screen. Unlike [`Topic`] it carries
/// the body text and has no reply counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub timestamp: String,
    pub views: u32,
    pub is_pinned: bool,
    pub is_hot: bool,
}

impl TopicDetail {
    /// Body text split into paragraphs on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split("\n\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub is_liked: bool,
}

impl Comment {
    /// Flip the like flag, moving the counter one step in the same direction.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    pub topics: u32,
    pub posts: u32,
    pub users: u32,
    pub online: u32,
}

/// Avatar fallback: first two characters of the name, uppercased.
pub fn initials(name: &str) -> String {
    name.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Thousands separated with commas, as the statistics card shows them.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
