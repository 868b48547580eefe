//! Compiled-in forum data. Every screen builds its own copy from these
//! constructors, so nothing a screen changes outlives it.

use super::icon::Icon;
use super::models::{Category, Comment, SiteStats, Topic, TopicDetail};

fn topic(
    id: u32,
    title: &str,
    author: &str,
    category: &str,
    replies: u32,
    views: u32,
    last_activity: &str,
    is_hot: bool,
    is_pinned: bool,
) -> Topic {
    Topic {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        replies,
        views,
        last_activity: last_activity.to_string(),
        is_hot,
        is_pinned,
    }
}

fn category(
    id: u32,
    name: &str,
    icon: &str,
    topics_count: u32,
    posts_count: u32,
    description: &str,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        icon: Icon::from_name(icon),
        topics_count,
        posts_count,
        description: description.to_string(),
    }
}

fn comment(id: u32, author: &str, content: &str, timestamp: &str, likes: u32, is_liked: bool) -> Comment {
    Comment {
        id,
        author: author.to_string(),
        avatar: None,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        likes,
        is_liked,
    }
}

pub fn topics() -> Vec<Topic> {
    vec![
        topic(
            1,
            "Добро пожаловать на наш форум! Правила и рекомендации",
            "Администратор",
            "Новости",
            45,
            1230,
            "5 мин назад",
            true,
            true,
        ),
        topic(
            2,
            "Обсуждение новых функций платформы",
            "TechGuru",
            "Разработка",
            89,
            3450,
            "15 мин назад",
            true,
            false,
        ),
        topic(
            3,
            "Как оптимизировать производительность веб-приложений?",
            "DevExpert",
            "Обучение",
            34,
            890,
            "1 час назад",
            false,
            false,
        ),
        topic(
            4,
            "Лучшие практики UI/UX дизайна в 2024",
            "DesignerPro",
            "Дизайн",
            67,
            2100,
            "2 часа назад",
            true,
            false,
        ),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Новости", "Newspaper", 45, 890, "Последние новости и обновления"),
        category(2, "Разработка", "Code2", 234, 5670, "Обсуждение технических вопросов"),
        category(3, "Дизайн", "Palette", 156, 3200, "UI/UX и графический дизайн"),
        category(4, "Обучение", "GraduationCap", 189, 4100, "Образовательные материалы"),
    ]
}

pub fn site_stats() -> SiteStats {
    SiteStats {
        topics: 624,
        posts: 13_860,
        users: 2_847,
        online: 143,
    }
}

pub fn topic_detail(id: u32) -> Option<TopicDetail> {
    let detail = match id {
        1 => TopicDetail {
            title: "Добро пожаловать на наш форум! Правила и рекомендации".to_string(),
            author: "Администратор".to_string(),
            category: "Новости".to_string(),
            content: "Добро пожаловать на наш форум! Мы рады видеть вас здесь. Это пространство для обмена знаниями, обсуждения идей и взаимопомощи.\n\n\
                      Пожалуйста, соблюдайте следующие правила:\n\n\
                      1. Будьте вежливы и уважительны ко всем участникам\n\
                      2. Не публикуйте спам и рекламу\n\
                      3. Используйте поиск перед созданием новой темы\n\
                      4. Пишите содержательные сообщения\n\
                      5. Выбирайте правильную категорию для своих тем\n\n\
                      Нарушители правил могут быть заблокированы модераторами. Давайте создадим дружелюбное и полезное сообщество вместе!"
                .to_string(),
            timestamp: "10 декабря 2024, 15:30".to_string(),
            views: 1230,
            is_pinned: true,
            is_hot: true,
        },
        2 => TopicDetail {
            title: "Обсуждение новых функций платформы".to_string(),
            author: "TechGuru".to_string(),
            category: "Разработка".to_string(),
            content: "Привет всем! Хочу обсудить какие новые функции вы хотели бы видеть на нашей платформе.\n\n\
                      Лично я считаю, что было бы здорово добавить:\n\
                      - Темную тему для интерфейса\n\
                      - Систему достижений и бейджей\n\
                      - Возможность создавать опросы в темах\n\
                      - Интеграцию с GitHub для разработчиков\n\n\
                      Что думаете? Какие функции были бы полезны вам?"
                .to_string(),
            timestamp: "11 декабря 2024, 09:15".to_string(),
            views: 3450,
            is_pinned: false,
            is_hot: true,
        },
        _ => return None,
    };
    Some(detail)
}

pub fn comments(topic_id: u32) -> Vec<Comment> {
    match topic_id {
        1 => vec![
            comment(
                1,
                "DevExpert",
                "Отличные правила! Спасибо за создание этого форума. Уже нашёл много полезной информации.",
                "2 часа назад",
                12,
                false,
            ),
            comment(
                2,
                "DesignerPro",
                "Согласен со всеми пунктами. Особенно важно соблюдать правило №1 - уважение к другим участникам.",
                "1 час назад",
                8,
                true,
            ),
            comment(
                3,
                "CodeMaster",
                "А есть ли возможность редактировать свои сообщения после публикации?",
                "30 минут назад",
                3,
                false,
            ),
        ],
        2 => vec![
            comment(
                1,
                "UIEnthusiast",
                "Темная тема - это must have! Многие пользователи работают вечером и им было бы комфортнее.",
                "45 минут назад",
                15,
                true,
            ),
            comment(
                2,
                "BackendDev",
                "Интеграция с GitHub звучит интересно. Можно было бы автоматически создавать темы для новых релизов.",
                "20 минут назад",
                7,
                false,
            ),
        ],
        _ => Vec::new(),
    }
}
