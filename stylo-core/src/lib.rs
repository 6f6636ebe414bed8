//! Stylo Core - Span-selection engine for text annotation
//!
//! This crate decides which annotation span to record from a raw,
//! possibly ragged text selection: it snaps selection edges onto word
//! boundaries, rejects degenerate selections, and resolves conflicts
//! with previously committed spans under a per-field overlap policy.
//! It also carries the platform-agnostic application state used by the
//! terminal frontend.

pub mod app;
pub mod boundary;
pub mod caret;
pub mod export;
pub mod model;
pub mod selection;

pub use app::{default_entities, App, Focus, Mode, PickerTarget};
pub use caret::Caret;
pub use export::{to_json, ExportDocument, ExportSpan};
pub use model::{Configuration, Document, Entity, SelectionNode, Span, SpanNode, TextSelection};
pub use selection::SpanSelection;
