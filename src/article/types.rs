use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Community engagement state of a single blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub upvotes: u64,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
}

/// Body of an add-comment request.
///
/// Fields are taken leniently: missing or `null` becomes empty, and any other
/// non-string JSON value is kept in its JSON text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl Article {
    pub fn new(upvotes: u64, comments: Vec<Comment>) -> Self {
        Self { upvotes, comments }
    }

    /// Counter saturates instead of wrapping.
    pub fn upvote(&mut self) {
        self.upvotes = self.upvotes.saturating_add(1);
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

impl NewComment {
    /// Parse a raw JSON request body.
    ///
    /// A blank body or a JSON value that is not an object yields an empty
    /// comment. Only text that is not valid JSON is an error.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

impl Comment {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
        }
    }
}

impl From<NewComment> for Comment {
    fn from(comment: NewComment) -> Self {
        Self {
            username: comment.username,
            text: comment.text,
        }
    }
}
