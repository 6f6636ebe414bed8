use serde::{Deserialize, Serialize};

use super::Entity;

/// The document node a raw selection was made in.
///
/// `text` is the full text of the node; selection offsets are relative
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionNode {
    pub id: String,
    pub text: String,
}

impl SelectionNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Node reference kept on a stored span. Carries no text so a store full
/// of spans does not duplicate the document once per span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpanNode {
    pub id: String,
}

impl From<&SelectionNode> for SpanNode {
    fn from(node: &SelectionNode) -> Self {
        Self {
            id: node.id.clone(),
        }
    }
}

/// A raw, caller-supplied selection before normalization.
///
/// Offsets are half-open character offsets into `node.text`. They are
/// signed because selection-capture layers can hand over offsets outside
/// the document; the store rejects those instead of panicking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextSelection {
    pub from: isize,
    pub to: isize,
    /// The caller's view of the selected substring. Not trusted by the
    /// engine; the stored text is always re-sliced from `node.text`.
    pub text: String,
    pub entity: Entity,
    pub node: SelectionNode,
}

/// A normalized, committed annotation span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub from: usize,
    pub to: usize,
    /// Character slice `node.text[from..to]` cached at creation time.
    pub text: String,
    pub entity: Entity,
    pub node: SpanNode,
}

impl Span {
    /// Check if this span covers the given character offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.from && offset < self.to
    }

    /// Half-open range intersection with another span
    pub fn intersects(&self, other: &Span) -> bool {
        self.from < other.to && other.from < self.to
    }

    /// Whether both spans record the same range with the same label.
    /// Matching is by entity id; display metadata is ignored.
    pub fn same_annotation(&self, other: &Span) -> bool {
        self.from == other.from && self.to == other.to && self.entity.id == other.entity.id
    }
}

/// Per-field annotation settings, passed to every `add_span` call.
///
/// An immutable value rather than store state so one store can serve
/// callers that annotate the same field under different settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Store raw character offsets without word-boundary snapping
    pub allow_character: bool,
    /// Let spans with intersecting ranges coexist
    pub allow_overlap: bool,
}
