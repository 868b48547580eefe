use std::fmt;
use std::str::FromStr;

use crate::utils::error::ForumError;

/// Screen address. `/` is the topic list, `/topic/{id}` a topic page.
///
/// The topic segment is kept as written; only the detail screen decides
/// whether it names a known topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Topic(String),
}

impl Route {
    pub fn topic(id: u32) -> Self {
        Self::Topic(id.to_string())
    }
}

impl FromStr for Route {
    type Err = ForumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Ok(Self::List);
        }

        match path.strip_prefix("/topic/") {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => {
                Ok(Self::Topic(segment.to_string()))
            }
            _ => Err(ForumError::InvalidRoute(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "/"),
            Self::Topic(raw) => write!(f, "/topic/{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::List);
        assert_eq!("".parse::<Route>().unwrap(), Route::List);
    }

    #[test]
    fn test_parse_topic() {
        assert_eq!("/topic/1".parse::<Route>().unwrap(), Route::topic(1));
        assert_eq!("/topic/2/".parse::<Route>().unwrap(), Route::topic(2));
    }

    #[test]
    fn test_non_numeric_segment_is_still_a_topic_route() {
        let route: Route = "/topic/abc".parse().unwrap();
        assert_eq!(route, Route::Topic("abc".to_string()));
    }

    #[test]
    fn test_unknown_paths_are_rejected() {
        for path in ["/users", "/topic", "/topic/", "/topic/1/edit", "topic/1"] {
            assert!(
                matches!(path.parse::<Route>(), Err(ForumError::InvalidRoute(_))),
                "{path}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::List.to_string(), "/");
        assert_eq!(Route::topic(42).to_string(), "/topic/42");
    }
}
