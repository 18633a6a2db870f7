use serde::{Deserialize, Serialize};

/// Comment record. Append-only: never edited or deleted. Deleting its
/// post leaves the comment in place with `post_id` cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub commenter_id: i32,
    pub post_id: Option<i32>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub commenter_id: i32,
    pub post_id: i32,
    pub text: String,
}

impl NewComment {
    pub fn new(commenter_id: i32, post_id: i32, text: String) -> Self {
        Self {
            commenter_id,
            post_id,
            text,
        }
    }
}
