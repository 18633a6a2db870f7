//! Flash messages shown on the next rendered page.

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered, please login.";
pub const EMAIL_NOT_FOUND: &str = "Email does not exist, please try again.";
pub const PASSWORD_MISMATCH: &str = "Password mismatch, please try again.";
pub const LOGIN_TO_COMMENT: &str = "You need to login or register to comment.";

/// Field errors.
pub const FIELD_REQUIRED: &str = "This field is required.";
pub const INVALID_URL: &str = "Invalid URL.";
pub const DUPLICATE_TITLE: &str = "A post with this title already exists.";
