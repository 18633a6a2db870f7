//! Typed form submissions.
//!
//! Every field defaults to empty so a missing field surfaces as a
//! validation error on the re-rendered form rather than a 400.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::messages::{FIELD_REQUIRED, INVALID_URL};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]+://(?P<host>[^/?:]+)(?P<port>:[0-9]+)?(?P<path>/.*?)?(?P<query>\?.*)?$")
        .expect("URL pattern compiles")
});

static HOST_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(xn-|[a-z0-9_]+)(-[a-z0-9_-]+)*$").expect("label pattern compiles")
});

static TLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z]{2,20}|xn--([a-z0-9]+-)*[a-z0-9]+)$").expect("TLD pattern compiles")
});

/// Per-field validation messages, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// Messages recorded against `field`.
    pub fn get<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Presence check: whitespace alone does not count.
    fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, FIELD_REQUIRED);
            false
        } else {
            true
        }
    }
}

/// Scheme, host with a TLD (or an IPv4 address), optional port, path and query.
pub fn is_valid_url(value: &str) -> bool {
    let Some(captures) = URL_RE.captures(value) else {
        return false;
    };
    captures
        .name("host")
        .is_some_and(|host| is_valid_host(host.as_str()))
}

fn is_valid_host(host: &str) -> bool {
    if host.parse::<Ipv4Addr>().is_ok() {
        return true;
    }

    let host = host.strip_suffix('.').unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };

    labels.len() >= 2
        && labels
            .iter()
            .all(|label| !label.is_empty() && label.len() <= 63 && HOST_LABEL_RE.is_match(label))
        && TLD_RE.is_match(tld)
}

/// POST /register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("email", &self.email);
        errors.require("password", &self.password);
        errors.require("name", &self.name);
        errors.into_result()
    }
}

/// POST /login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("email", &self.email);
        errors.require("password", &self.password);
        errors.into_result()
    }
}

/// POST /new-post and /edit-post/{id}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title);
        errors.require("subtitle", &self.subtitle);
        if errors.require("img_url", &self.img_url) && !is_valid_url(&self.img_url) {
            errors.add("img_url", INVALID_URL);
        }
        errors.require("body", &self.body);
        errors.into_result()
    }
}

/// POST /{post_id}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub comment: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("comment", &self.comment);
        errors.into_result()
    }
}
