//! The span selection store: owns the accepted spans for one document
//! field and mediates every mutation.

use serde::{Deserialize, Serialize};

use crate::boundary;
use crate::model::{Configuration, Entity, Span, SpanNode, TextSelection};

/// Ordered collection of accepted spans for a single document field.
///
/// All operations resolve malformed input by silently declining the
/// mutation; the post-call collection is the caller's source of truth.
/// UI selection handlers attempt operations speculatively and observe the
/// result rather than branch on error codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanSelection {
    spans: Vec<Span>,
}

impl SpanSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted spans in insertion order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Normalize a raw selection and commit it under the given settings.
    ///
    /// Rejected outright when the offsets fall outside the node text or
    /// the range is empty. In word-level mode the range is snapped onto
    /// word boundaries first and rejected if it was whitespace only.
    /// With overlap forbidden the committed span subsumes every stored
    /// span it intersects; with overlap allowed only an exact
    /// `(from, to, entity)` duplicate is declined.
    pub fn add_span(&mut self, selection: &TextSelection, config: Configuration) {
        let chars: Vec<char> = selection.node.text.chars().collect();

        if selection.from < 0 || selection.from >= selection.to {
            return;
        }
        let (from, to) = (selection.from as usize, selection.to as usize);
        if to > chars.len() {
            return;
        }

        let (from, to) = if config.allow_character {
            (from, to)
        } else {
            match boundary::snap_to_word(&chars, from, to) {
                Some(range) => range,
                None => return,
            }
        };

        let span = Span {
            from,
            to,
            text: chars[from..to].iter().collect(),
            entity: selection.entity.clone(),
            node: SpanNode::from(&selection.node),
        };

        if config.allow_overlap {
            if self.spans.iter().any(|s| s.same_annotation(&span)) {
                return;
            }
        } else {
            // New selection wins: subsume whatever it overlaps, whatever
            // the entity. Surviving spans keep their relative order.
            self.spans.retain(|s| !s.intersects(&span));
        }

        self.spans.push(span);
    }

    /// Remove the stored span matching `span` by value. Silently ignored
    /// when nothing matches.
    pub fn remove_span(&mut self, span: &Span) {
        if let Some(pos) = self.spans.iter().position(|s| matches(s, span)) {
            self.spans.remove(pos);
        }
    }

    /// Swap the entity of the stored span matching `span` by value.
    /// On a miss every stored span is left untouched, including spans
    /// that happen to share the same range.
    pub fn replace_entity(&mut self, span: &Span, new_entity: Entity) {
        if let Some(stored) = self.spans.iter_mut().find(|s| matches(s, span)) {
            stored.entity = new_entity;
        }
    }

    /// Append already-normalized spans, e.g. re-hydrated from storage.
    /// Trusted input: no snapping, no conflict resolution.
    pub fn load_spans(&mut self, spans: impl IntoIterator<Item = Span>) {
        self.spans.extend(spans);
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }
}

/// Value-equality match rule for lookups: range, entity id and node id.
/// The cached text is deliberately excluded so a caller holding a span
/// from an older render does not need it byte-identical.
fn matches(stored: &Span, lookup: &Span) -> bool {
    stored.same_annotation(lookup) && stored.node.id == lookup.node.id
}
