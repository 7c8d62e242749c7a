use serde::{Serialize, Deserialize};
use uuid::Uuid;

// Labels longer than this are shortened on the wheel face
const LABEL_MAX_CHARS: usize = 8;
const LABEL_KEEP_CHARS: usize = 6;
const LABEL_ELLIPSIS: &str = "..";

/// A single entry on the wheel. Identity is `id`; text and color may repeat.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: String,
    pub text: String,
    pub color: String,
}

impl Prize {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            color: color.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: color.into(),
        }
    }

    /// Text as drawn on a segment. The stored `text` is left untouched.
    pub fn display_label(&self) -> String {
        if self.text.chars().count() > LABEL_MAX_CHARS {
            let head: String = self.text.chars().take(LABEL_KEEP_CHARS).collect();
            format!("{}{}", head, LABEL_ELLIPSIS)
        } else {
            self.text.clone()
        }
    }
}
