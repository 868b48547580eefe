use serde::Serialize;
use tracing::{debug, info};

use super::fixtures;
use super::models::{Comment, TopicDetail};

/// Author shown on comments written in this session.
pub const OWN_AUTHOR: &str = "Вы";
/// Timestamp marker for comments written in this session.
pub const JUST_NOW: &str = "только что";
/// Shown instead of the composer while logged out.
pub const LOGIN_PROMPT: &str = "Войдите или зарегистрируйтесь, чтобы оставлять комментарии";
/// Length shown next to the composer's character counter.
pub const COMMENT_LIMIT: usize = 1000;

/// A resolved topic together with its comment thread.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicThread {
    pub id: u32,
    pub topic: TopicDetail,
    pub comments: Vec<Comment>,
    pub is_logged_in: bool,
    pub draft: String,
    #[serde(skip)]
    pub selected_comment: usize,
    #[serde(skip)]
    next_comment_id: u32,
}

impl TopicThread {
    fn new(id: u32, topic: TopicDetail, comments: Vec<Comment>) -> Self {
        let next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            id,
            topic,
            comments,
            // Separate from the list screen's flag and never switched on here.
            is_logged_in: false,
            draft: String::new(),
            selected_comment: 0,
            next_comment_id,
        }
    }

    /// Append a comment written by the current visitor. Whitespace-only
    /// text is ignored. Returns the id of the new comment.
    pub fn add_comment(&mut self, text: &str) -> Option<u32> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.next_comment_id;
        self.next_comment_id += 1;
        self.comments.push(Comment {
            id,
            author: OWN_AUTHOR.to_string(),
            avatar: None,
            content: text.to_string(),
            timestamp: JUST_NOW.to_string(),
            likes: 0,
            is_liked: false,
        });
        info!("Added comment {} to topic {}", id, self.id);
        Some(id)
    }

    /// Flip the like on comment `id`. Unknown ids are ignored.
    pub fn toggle_like(&mut self, id: u32) -> bool {
        match self.comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.toggle_like();
                debug!(
                    "Comment {} liked={} likes={}",
                    comment.id, comment.is_liked, comment.likes
                );
                true
            }
            None => false,
        }
    }

    pub fn toggle_selected_like(&mut self) -> bool {
        match self.comments.get(self.selected_comment).map(|c| c.id) {
            Some(id) => self.toggle_like(id),
            None => false,
        }
    }

    /// Post the composer text. Only possible while logged in; the draft is
    /// cleared on success and kept otherwise.
    pub fn submit_draft(&mut self) -> Option<u32> {
        if !self.is_logged_in {
            return None;
        }
        let text = self.draft.clone();
        let id = self.add_comment(&text)?;
        self.draft.clear();
        self.selected_comment = self.comments.len() - 1;
        Some(id)
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.draft.pop();
    }

    pub fn comments_heading(&self) -> String {
        format!("Комментарии ({})", self.comments.len())
    }

    pub fn move_up(&mut self) {
        self.selected_comment = self.selected_comment.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_comment + 1 < self.comments.len() {
            self.selected_comment += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.selected_comment = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.selected_comment = self.comments.len().saturating_sub(1);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DetailView {
    NotFound { requested: String },
    Thread(TopicThread),
}

/// State of the topic detail screen, resolved once from the route segment.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TopicDetailScreen {
    pub view: DetailView,
}

impl TopicDetailScreen {
    pub fn open(requested: &str) -> Self {
        let resolved = requested
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| fixtures::topic_detail(id).map(|topic| (id, topic)));

        let view = match resolved {
            Some((id, topic)) => {
                debug!("Resolved topic {}", id);
                DetailView::Thread(TopicThread::new(id, topic, fixtures::comments(id)))
            }
            None => {
                info!("Topic {:?} not found", requested);
                DetailView::NotFound {
                    requested: requested.to_string(),
                }
            }
        };
        Self { view }
    }

    pub fn thread(&self) -> Option<&TopicThread> {
        match &self.view {
            DetailView::Thread(thread) => Some(thread),
            DetailView::NotFound { .. } => None,
        }
    }

    pub fn thread_mut(&mut self) -> Option<&mut TopicThread> {
        match &mut self.view {
            DetailView::Thread(thread) => Some(thread),
            DetailView::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.thread().is_none()
    }
}
