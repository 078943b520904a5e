//! Post entity - one published article (news / review / guide)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Words per minute used to derive reading time from content
const WORDS_PER_MINUTE: usize = 200;

/// Content type of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Review,
    News,
    Guide,
}

impl PostType {
    /// Lowercase storage form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::News => "news",
            Self::Guide => "guide",
        }
    }

    /// Capitalized display form
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::News => "News",
            Self::Guide => "Guide",
        }
    }

    /// Parse a stored value, degrading unknown values to `News`
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "review" => Self::Review,
            "guide" => Self::Guide,
            _ => Self::News,
        }
    }
}

impl std::str::FromStr for PostType {
    type Err = UnknownPostType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review" => Ok(Self::Review),
            "news" => Ok(Self::News),
            "guide" => Ok(Self::Guide),
            other => Err(UnknownPostType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strict post-type parsing (public API input)
#[derive(Debug, thiserror::Error)]
#[error("Unknown post type: {0}")]
pub struct UnknownPostType(pub String);

/// Post entity
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub categories: Vec<String>,
    pub meta_description: Option<String>,
    pub post_type: PostType,
    pub views: i64,
    pub reading_time_minutes: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post, deriving the reading time from the content
    pub fn new(
        id: Uuid,
        title: String,
        slug: String,
        content: String,
        author: String,
        post_type: PostType,
    ) -> Self {
        let reading_time = reading_time_minutes(&content);
        let now = Utc::now();
        Self {
            id,
            title,
            slug,
            content,
            excerpt: None,
            image_url: None,
            author,
            categories: Vec::new(),
            meta_description: None,
            post_type,
            views: 0,
            reading_time_minutes: reading_time,
            featured: false,
            created_at: now,
            updated_at: None,
            published_at: Some(now),
        }
    }

    /// Check if the post has been published
    #[inline]
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Check if the post can carry a car specification
    #[inline]
    pub fn is_review(&self) -> bool {
        self.post_type == PostType::Review
    }

    /// Hour-of-day (0-23, UTC) the post was published, 0 when unpublished
    #[inline]
    pub fn published_hour(&self) -> u32 {
        use chrono::Timelike;
        self.published_at.map_or(0, |at| at.hour())
    }
}

/// Derive reading time in minutes from content (ceil of words / 200, min 1)
#[must_use]
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    minutes.max(1) as i32
}
