use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{Document, Span};
use crate::selection::SpanSelection;

/// Wire shape consumed by persistence sinks: one triple per span.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSpan {
    pub from: usize,
    pub to: usize,
    pub entity_id: String,
}

impl From<&Span> for ExportSpan {
    fn from(span: &Span) -> Self {
        Self {
            from: span.from,
            to: span.to,
            entity_id: span.entity.id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub node_id: String,
    pub title: String,
    pub word_count: usize,
    pub spans: Vec<ExportSpan>,
}

impl ExportDocument {
    pub fn new(doc: &Document, selection: &SpanSelection) -> Self {
        Self {
            node_id: doc.node_id(),
            title: doc.title.clone(),
            word_count: doc.word_count(),
            spans: selection.spans().iter().map(ExportSpan::from).collect(),
        }
    }
}

/// Serialize the committed spans of a document to pretty JSON
pub fn to_json(doc: &Document, selection: &SpanSelection) -> Result<String> {
    let export = ExportDocument::new(doc, selection);
    serde_json::to_string_pretty(&export).context("Failed to serialize spans")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Configuration, Entity, SelectionNode, TextSelection};

    #[test]
    fn test_export_span_format() {
        let mut selection = SpanSelection::new();
        selection.add_span(
            &TextSelection {
                from: 0,
                to: 5,
                text: "Hello".to_string(),
                entity: Entity::named("greeting", "Greeting"),
                node: SelectionNode::new("node-id", "Hello world"),
            },
            Configuration::default(),
        );

        let export = ExportSpan::from(&selection.spans()[0]);
        let json = serde_json::to_string(&export).unwrap();

        // Verify camelCase field names and that only the triple is exported
        assert!(json.contains("\"from\":0"));
        assert!(json.contains("\"to\":5"));
        assert!(json.contains("\"entityId\":\"greeting\""));
        assert!(!json.contains("Greeting"));
        assert!(!json.contains("\"text\""));
    }

    #[test]
    fn test_export_document_format() {
        let doc = Document::new("Test".to_string(), "Hello world".to_string());
        let mut selection = SpanSelection::new();
        selection.add_span(
            &TextSelection {
                from: 6,
                to: 11,
                text: "world".to_string(),
                entity: Entity::new("TOKEN"),
                node: SelectionNode::new(doc.node_id(), doc.content.as_str()),
            },
            Configuration::default(),
        );

        let json = to_json(&doc, &selection).unwrap();

        assert!(json.contains(&format!("\"nodeId\": \"{}\"", doc.node_id())));
        assert!(json.contains("\"title\": \"Test\""));
        assert!(json.contains("\"wordCount\": 2"));
        assert!(json.contains("\"entityId\": \"TOKEN\""));
    }
}
