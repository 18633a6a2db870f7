//! # Blog Shared
//!
//! Request types shared by the server and its tests: typed form
//! structs with validation, and the flash messages users see.

pub mod forms;
pub mod messages;

pub use forms::{CommentForm, FieldErrors, LoginForm, PostForm, RegisterForm};
