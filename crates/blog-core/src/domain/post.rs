use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Human-readable date stamped on posts, e.g. "October 19, 2026".
pub const POST_DATE_FORMAT: &str = "%B %d, %Y";

/// Post record - a blog article owned by an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
}

impl Post {
    /// Replace the editable fields. Authorship and date are left untouched.
    pub fn revise(&mut self, title: String, subtitle: String, img_url: String, body: String) {
        self.title = title;
        self.subtitle = subtitle;
        self.img_url = img_url;
        self.body = body;
    }
}

/// A post about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
}

impl NewPost {
    /// Create a post dated today (local time).
    pub fn new(
        author_id: i32,
        title: String,
        subtitle: String,
        img_url: String,
        body: String,
    ) -> Self {
        Self::dated(
            Local::now().date_naive(),
            author_id,
            title,
            subtitle,
            img_url,
            body,
        )
    }

    pub fn dated(
        day: NaiveDate,
        author_id: i32,
        title: String,
        subtitle: String,
        img_url: String,
        body: String,
    ) -> Self {
        Self {
            author_id,
            title,
            subtitle,
            date: day.format(POST_DATE_FORMAT).to_string(),
            body,
            img_url,
        }
    }
}
