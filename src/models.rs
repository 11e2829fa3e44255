// src/models.rs
//
// Validated records. Constructors are the only way in, so anything holding
// a `Quote`/`Author`/`Tag`/`Comment` has already passed the field checks.

use chrono::NaiveDate;

use crate::core::sanitize::{normalize_tag, normalize_ws};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{record}: {field} is empty")]
    Empty { record: &'static str, field: &'static str },
    #[error("malformed email {0:?}")]
    Email(String),
    #[error("unparseable birth date {0:?}")]
    BirthDate(String),
}

fn required(record: &'static str, field: &'static str, v: &str) -> Result<String, ValidationError> {
    let v = normalize_ws(v);
    if v.is_empty() {
        Err(ValidationError::Empty { record, field })
    } else {
        Ok(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub description: String,
}

impl Author {
    /// `born` is the site's long form, e.g. "March 14, 1879".
    pub fn new(
        name: &str,
        born: Option<&str>,
        birth_place: Option<&str>,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let name = required("author", "name", name)?;
        let birth_date = match born.map(str::trim).filter(|b| !b.is_empty()) {
            Some(b) => Some(parse_birth_date(b)?),
            None => None,
        };
        let birth_place = birth_place.map(normalize_ws).filter(|p| !p.is_empty());
        Ok(Self { name, birth_date, birth_place, description: description.trim().to_string() })
    }

    /// Author with no about-page data.
    pub fn bare(name: &str) -> Result<Self, ValidationError> {
        Self::new(name, None, None, "")
    }
}

fn parse_birth_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let s = normalize_ws(s);
    ["%B %d, %Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&s, fmt).ok())
        .ok_or(ValidationError::BirthDate(s))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = normalize_tag(name);
        if name.is_empty() {
            return Err(ValidationError::Empty { record: "tag", field: "name" });
        }
        Ok(Self { name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    /// Owning author, by unique name.
    pub author: String,
    /// Normalized, deduplicated, source order.
    pub tags: Vec<Tag>,
}

impl Quote {
    pub fn new<S: AsRef<str>>(text: &str, author: &str, tags: &[S]) -> Result<Self, ValidationError> {
        let text = required("quote", "text", text)?;
        let author = required("quote", "author", author)?;

        let mut out: Vec<Tag> = Vec::with_capacity(tags.len());
        for t in tags {
            // Blank tags are noise in the markup, not a reason to drop the quote.
            let Ok(tag) = Tag::new(t.as_ref()) else { continue };
            if !out.contains(&tag) {
                out.push(tag);
            }
        }
        Ok(Self { text, author, tags: out })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Id on the placeholder API; kept so a re-run cannot load it twice.
    pub source_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    pub fn new(source_id: i64, name: &str, email: &str, body: &str) -> Result<Self, ValidationError> {
        let name = required("comment", "name", name)?;
        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(ValidationError::Empty { record: "comment", field: "body" });
        }
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::Email(s!(email)));
        }
        Ok(Self { source_id, name, email: s!(email), body })
    }
}

/// local@domain.tld: one '@', no whitespace, a dot strictly inside the domain.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
