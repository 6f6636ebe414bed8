pub mod document;
pub mod entity;
pub mod span;

pub use document::Document;
pub use entity::Entity;
pub use span::{Configuration, SelectionNode, Span, SpanNode, TextSelection};
