//! Domain records - the core business objects.

mod comment;
mod post;
mod session;
mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, POST_DATE_FORMAT, Post};
pub use session::SessionData;
pub use user::{ADMIN_USER_ID, NewUser, User, is_admin};
