// src/scrape/comments.rs
//
// The comments endpoint returns a JSON array of
// `{ "postId": 1, "id": 1, "name": "…", "email": "…", "body": "…" }`.
// Items that don't fit that shape are counted, not fatal.

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    #[serde(default)]
    pub post_id: Option<i64>,
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentBatch {
    pub comments: Vec<RawComment>,
    pub malformed: usize,
}

/// Fails only when the payload is not a JSON array at all.
pub fn parse_comments(payload: &str) -> Result<CommentBatch, serde_json::Error> {
    let items: Vec<Value> = serde_json::from_str(payload)?;
    let mut batch = CommentBatch::default();

    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<RawComment>(item) {
            Ok(c) => batch.comments.push(c),
            Err(e) => {
                logw!("Comments: item {i} skipped: {e}");
                batch.malformed += 1;
            }
        }
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_and_counts_bad_ones() {
        let payload = r#"[
            {"postId": 1, "id": 1, "name": "id labore", "email": "Eliseo@gardner.biz", "body": "laudantium"},
            {"postId": 1, "id": 2, "name": "quo vero", "email": "Jayne_Kuhic@sydney.com"},
            {"postId": 1, "id": 3, "email": "no-name@x.org", "body": "b"},
            42
        ]"#;
        let batch = parse_comments(payload).unwrap();
        assert_eq!(batch.comments.len(), 2);
        assert_eq!(batch.malformed, 2);
        assert_eq!(batch.comments[0].id, Some(1));
        assert_eq!(batch.comments[0].post_id, Some(1));
        assert_eq!(batch.comments[1].body, "");
    }

    #[test]
    fn non_array_payload_is_an_error() {
        assert!(parse_comments(r#"{"error": "nope"}"#).is_err());
        assert!(parse_comments("<html>").is_err());
    }
}
