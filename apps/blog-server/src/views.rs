//! Server-rendered HTML pages.
//!
//! Plain text is escaped with `html_escape`; post bodies and comments are
//! rich HTML and go through `ammonia` instead.

use std::fmt::Write;

use blog_core::domain::{Comment, Post, User};
use blog_shared::{CommentForm, FieldErrors, LoginForm, PostForm, RegisterForm};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// What every page needs from the session.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub logged_in: bool,
    pub is_admin: bool,
    pub flashes: Vec<String>,
}

/// Which post editor to show.
#[derive(Debug, Clone, Copy)]
pub enum Editor {
    New,
    Edit(i32),
}

fn rich(html: &str) -> String {
    ammonia::clean(html)
}

fn author_name(author: Option<&User>) -> &str {
    author.map(|u| u.name.as_str()).unwrap_or("Unknown")
}

fn layout(page: &Page, title: &str, content: &str) -> String {
    let mut nav = String::from(r#"<a href="/">Home</a>"#);
    if page.logged_in {
        nav.push_str(r#" <a href="/logout">Log Out</a>"#);
    } else {
        nav.push_str(r#" <a href="/login">Login</a> <a href="/register">Register</a>"#);
    }

    let mut flashes = String::new();
    for message in &page.flashes {
        let _ = write!(flashes, r#"<p class="flash">{}</p>"#, text(message));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<nav>{nav}</nav>
{flashes}
<main>
{content}
</main>
</body>
</html>
"#,
        title = text(title),
    )
}

fn field_errors(errors: &FieldErrors, name: &str) -> String {
    errors
        .get(name)
        .map(|message| format!(r#"<span class="error">{}</span>"#, text(message)))
        .collect()
}

fn input(label: &str, name: &str, kind: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<label>{label} <input type="{kind}" name="{name}" value="{value}"></label>{errors}"#,
        label = text(label),
        value = attr(value),
        errors = field_errors(errors, name),
    )
}

fn textarea(label: &str, name: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<label>{label} <textarea name="{name}">{value}</textarea></label>{errors}"#,
        label = text(label),
        value = text(value),
        errors = field_errors(errors, name),
    )
}

fn form(action: &str, fields: &[String], submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">{fields}<button type="submit">{submit}</button></form>"#,
        action = attr(action),
        fields = fields.concat(),
        submit = text(submit),
    )
}

/// GET /
pub fn index(page: &Page, posts: &[(Post, Option<User>)]) -> String {
    let mut content = String::from("<h1>Blog</h1>\n");
    for (post, author) in posts {
        let _ = write!(
            content,
            r#"<article><a href="/{id}"><h2>{title}</h2><h3>{subtitle}</h3></a><p>Posted by {author} on {date}</p>"#,
            id = post.id,
            title = text(&post.title),
            subtitle = text(&post.subtitle),
            author = text(author_name(author.as_ref())),
            date = text(&post.date),
        );
        if page.is_admin {
            let _ = write!(content, r#" <a href="/delete/{}">✘</a>"#, post.id);
        }
        content.push_str("</article>\n");
    }
    if page.is_admin {
        content.push_str(r#"<a href="/new-post">Create New Post</a>"#);
    }
    layout(page, "Blog", &content)
}

/// GET /{post_id}
pub fn post(
    page: &Page,
    post: &Post,
    author: Option<&User>,
    comments: &[(Comment, Option<User>)],
    comment_form: &CommentForm,
    errors: &FieldErrors,
) -> String {
    let mut content = format!(
        r#"<header><img class="cover" src="{img}" alt=""><h1>{title}</h1><h2>{subtitle}</h2><p>Posted by {author} on {date}</p></header>
<article>{body}</article>
"#,
        img = attr(&post.img_url),
        title = text(&post.title),
        subtitle = text(&post.subtitle),
        author = text(author_name(author)),
        date = text(&post.date),
        body = rich(&post.body),
    );

    if page.is_admin {
        let _ = writeln!(content, r#"<a href="/edit-post/{}">Edit Post</a>"#, post.id);
    }

    content.push_str(&form(
        &format!("/{}", post.id),
        &[textarea("Comment", "comment", &comment_form.comment, errors)],
        "Submit Comment",
    ));

    content.push_str("\n<ul class=\"comments\">");
    for (comment, commenter) in comments {
        let _ = write!(
            content,
            r#"<li><div class="comment">{body}</div><span class="commenter">{name}</span></li>"#,
            body = rich(&comment.text),
            name = text(author_name(commenter.as_ref())),
        );
    }
    content.push_str("</ul>");

    layout(page, &post.title, &content)
}

/// GET /register
pub fn register(page: &Page, register_form: &RegisterForm, errors: &FieldErrors) -> String {
    let content = format!(
        "<h1>Register</h1>\n{}",
        form(
            "/register",
            &[
                input("Email", "email", "email", &register_form.email, errors),
                input("Password", "password", "password", "", errors),
                input("Name", "name", "text", &register_form.name, errors),
            ],
            "Sign Me Up!",
        )
    );
    layout(page, "Register", &content)
}

/// GET /login
pub fn login(page: &Page, login_form: &LoginForm, errors: &FieldErrors) -> String {
    let content = format!(
        "<h1>Log In</h1>\n{}",
        form(
            "/login",
            &[
                input("Email", "email", "email", &login_form.email, errors),
                input("Password", "password", "password", "", errors),
            ],
            "Let Me In!",
        )
    );
    layout(page, "Log In", &content)
}

/// GET /new-post and /edit-post/{post_id}
pub fn post_editor(page: &Page, editor: Editor, post_form: &PostForm, errors: &FieldErrors) -> String {
    let (heading, action) = match editor {
        Editor::New => ("New Post".to_string(), "/new-post".to_string()),
        Editor::Edit(id) => ("Edit Post".to_string(), format!("/edit-post/{id}")),
    };
    let content = format!(
        "<h1>{}</h1>\n{}",
        text(&heading),
        form(
            &action,
            &[
                input("Blog Post Title", "title", "text", &post_form.title, errors),
                input("Subtitle", "subtitle", "text", &post_form.subtitle, errors),
                input("Blog Image URL", "img_url", "url", &post_form.img_url, errors),
                textarea("Blog Content", "body", &post_form.body, errors),
            ],
            "Submit Post",
        )
    );
    layout(page, &heading, &content)
}

/// Error pages carry no session state.
pub fn error(status: u16, message: &str) -> String {
    let content = format!("<h1>{status}</h1>\n<p>{}</p>", text(message));
    layout(&Page::default(), message, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: 5,
            author_id: 1,
            title: "<Rust> & you".to_string(),
            subtitle: "Sub".to_string(),
            date: "October 19, 2026".to_string(),
            body: "<p>Hello</p><script>alert(1)</script>".to_string(),
            img_url: "https://example.com/a.png".to_string(),
        }
    }

    #[test]
    fn titles_are_escaped_and_bodies_sanitized() {
        let html = post(
            &Page::default(),
            &sample_post(),
            None,
            &[],
            &CommentForm::default(),
            &FieldErrors::new(),
        );

        assert!(html.contains("&lt;Rust&gt; &amp; you"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn image_url_stays_inside_its_attribute() {
        let post = Post {
            img_url: r#"https://example.com/a.png');x:y('"><script>"#.to_string(),
            ..sample_post()
        };

        let html = super::post(
            &Page::default(),
            &post,
            None,
            &[],
            &CommentForm::default(),
            &FieldErrors::new(),
        );

        assert!(html.contains(r#"src="https://example.com/a.png');x:y('&quot;"#));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("url("));
    }

    #[test]
    fn admin_controls_only_for_admin() {
        let posts = vec![(sample_post(), None)];

        let visitor = index(&Page::default(), &posts);
        assert!(!visitor.contains("/new-post"));
        assert!(!visitor.contains("/delete/5"));

        let admin = index(
            &Page {
                logged_in: true,
                is_admin: true,
                flashes: vec![],
            },
            &posts,
        );
        assert!(admin.contains("/new-post"));
        assert!(admin.contains("/delete/5"));
    }

    #[test]
    fn flashes_and_field_errors_are_rendered() {
        let mut errors = FieldErrors::new();
        errors.add("email", "This field is required.");
        let page = Page {
            flashes: vec!["Password mismatch, please try again.".to_string()],
            ..Page::default()
        };

        let html = login(&page, &LoginForm::default(), &errors);

        assert!(html.contains("Password mismatch, please try again."));
        assert!(html.contains("This field is required."));
    }

    #[test]
    fn password_is_never_echoed() {
        let form = RegisterForm {
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
            name: "A".to_string(),
        };

        let html = register(&Page::default(), &form, &FieldErrors::new());

        assert!(html.contains("a@x.com"));
        assert!(!html.contains("hunter2"));
    }
}
