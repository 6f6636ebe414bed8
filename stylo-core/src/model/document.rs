use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document being annotated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            filename: None,
            filepath: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a document with filename metadata (used by CLI when loading from file)
    pub fn with_file_info(
        title: String,
        content: String,
        filepath: String,
        filename: String,
    ) -> Self {
        let mut doc = Self::new(title, content);
        doc.filepath = Some(filepath);
        doc.filename = Some(filename);
        doc
    }

    /// Node id used when building selections against this document.
    /// Spans reference documents through it.
    pub fn node_id(&self) -> String {
        self.id.to_string()
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
