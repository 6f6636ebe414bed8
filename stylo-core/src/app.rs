use crate::caret::Caret;
use crate::model::{Configuration, Document, Entity, SelectionNode, Span, TextSelection};
use crate::selection::SpanSelection;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Select,
    EntityPicker,
    Input,
    Help,
}

/// Focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Sidebar,
}

/// What the entity picker applies its choice to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    /// Pick the entity used for new spans
    ActiveEntity,
    /// Relabel the span selected in the sidebar
    ReplaceSpan,
}

/// Platform-agnostic application state
pub struct App {
    pub document: Option<Document>,
    pub caret: Caret,
    pub mode: Mode,
    pub focus: Focus,
    pub running: bool,

    /// Annotation settings, passed into every store call
    pub config: Configuration,

    /// Entity palette supplied by the host
    pub entities: Vec<Entity>,
    pub active_entity: usize,

    /// Committed spans for the loaded document
    pub selection: SpanSelection,

    /// Select-mode anchor offset
    pub anchor: Option<usize>,

    // Sidebar state
    pub sidebar_selected: usize,

    // Picker state
    pub entity_selected: usize,
    pub picker_target: PickerTarget,

    // Input state (file path prompt)
    pub input_buffer: String,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            document: None,
            caret: Caret::new(),
            mode: Mode::Normal,
            focus: Focus::Editor,
            running: true,

            config: Configuration::default(),

            entities,
            active_entity: 0,

            selection: SpanSelection::new(),

            anchor: None,

            sidebar_selected: 0,

            entity_selected: 0,
            picker_target: PickerTarget::ActiveEntity,

            input_buffer: String::new(),

            status_message: None,
        }
    }

    pub fn load_document(&mut self, doc: Document) {
        self.caret.set_content(&doc.content);
        self.document = Some(doc);
        self.selection.clear();
        self.sidebar_selected = 0;
        self.anchor = None;
        self.mode = Mode::Normal;
    }

    pub fn active_entity(&self) -> Option<&Entity> {
        self.entities.get(self.active_entity)
    }

    /// Enter select mode, anchoring at the caret
    pub fn enter_select_mode(&mut self) {
        if self.document.is_some() {
            self.mode = Mode::Select;
            self.anchor = Some(self.caret.offset());
        }
    }

    pub fn cancel_select_mode(&mut self) {
        self.mode = Mode::Normal;
        self.anchor = None;
    }

    /// Current half-open selection range between anchor and caret
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        let caret = self.caret.offset();
        Some((anchor.min(caret), anchor.max(caret)))
    }

    /// Commit the select-mode range as a span.
    ///
    /// The store decides silently; the outcome is read off the collection
    /// afterwards, which is the only contract it offers.
    pub fn commit_selection(&mut self) {
        let Some((from, to)) = self.selection_range() else {
            return;
        };
        let Some(doc) = self.document.as_ref() else {
            return;
        };
        let Some(entity) = self.entities.get(self.active_entity) else {
            return;
        };

        let raw = TextSelection {
            from: from as isize,
            to: to as isize,
            text: doc.content.chars().skip(from).take(to - from).collect(),
            entity: entity.clone(),
            node: SelectionNode::new(doc.node_id(), doc.content.as_str()),
        };

        let before: Vec<Span> = self.selection.spans().to_vec();
        self.selection.add_span(&raw, self.config);

        if self.selection.spans() != before.as_slice() {
            self.set_status("Span added");
        } else {
            self.set_status("Selection rejected");
        }

        self.mode = Mode::Normal;
        self.anchor = None;
    }

    /// Spans ordered by start offset for sidebar display
    pub fn spans_sorted(&self) -> Vec<&Span> {
        let mut sorted: Vec<_> = self.selection.spans().iter().collect();
        sorted.sort_by_key(|s| (s.from, s.to));
        sorted
    }

    /// Span currently selected in the sidebar
    pub fn selected_span(&self) -> Option<&Span> {
        self.spans_sorted().get(self.sidebar_selected).copied()
    }

    pub fn next_span(&mut self) {
        let count = self.selection.len();
        if count > 0 {
            self.sidebar_selected = (self.sidebar_selected + 1) % count;
            self.caret_to_selected_span();
        }
    }

    pub fn prev_span(&mut self) {
        let count = self.selection.len();
        if count > 0 {
            self.sidebar_selected = if self.sidebar_selected == 0 {
                count - 1
            } else {
                self.sidebar_selected - 1
            };
            self.caret_to_selected_span();
        }
    }

    fn caret_to_selected_span(&mut self) {
        if let Some(from) = self.selected_span().map(|s| s.from) {
            self.caret.set_offset(from);
        }
    }

    /// Delete the span selected in the sidebar
    pub fn delete_selected_span(&mut self) -> bool {
        let Some(span) = self.selected_span().cloned() else {
            return false;
        };

        self.selection.remove_span(&span);

        let count = self.selection.len();
        if self.sidebar_selected >= count && count > 0 {
            self.sidebar_selected = count - 1;
        }
        self.set_status("Span removed");
        true
    }

    /// Open the entity picker, preselecting the current choice
    pub fn open_entity_picker(&mut self, target: PickerTarget) {
        self.picker_target = target;
        self.entity_selected = match target {
            PickerTarget::ActiveEntity => self.active_entity,
            PickerTarget::ReplaceSpan => self
                .selected_span()
                .and_then(|span| self.entities.iter().position(|e| e.id == span.entity.id))
                .unwrap_or(0),
        };
        self.mode = Mode::EntityPicker;
    }

    /// Apply the picker choice to its target
    pub fn apply_entity_picker(&mut self) {
        let Some(entity) = self.entities.get(self.entity_selected).cloned() else {
            self.mode = Mode::Normal;
            return;
        };

        match self.picker_target {
            PickerTarget::ActiveEntity => {
                self.active_entity = self.entity_selected;
                self.set_status(&format!("Labeling as {}", entity.label()));
            }
            PickerTarget::ReplaceSpan => {
                if let Some(span) = self.selected_span().cloned() {
                    self.selection.replace_entity(&span, entity);
                    self.set_status("Entity replaced");
                }
            }
        }
        self.mode = Mode::Normal;
    }

    pub fn toggle_allow_character(&mut self) {
        self.config.allow_character = !self.config.allow_character;
        let state = if self.config.allow_character {
            "character"
        } else {
            "word"
        };
        self.set_status(&format!("Granularity: {state} level"));
    }

    pub fn toggle_allow_overlap(&mut self) {
        self.config.allow_overlap = !self.config.allow_overlap;
        let state = if self.config.allow_overlap {
            "allowed"
        } else {
            "forbidden"
        };
        self.set_status(&format!("Overlap: {state}"));
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle focus between editor and sidebar
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editor => Focus::Sidebar,
            Focus::Sidebar => Focus::Editor,
        };
    }

    /// Get title for display
    pub fn title(&self) -> String {
        self.document
            .as_ref()
            .and_then(|d| d.filename.clone())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(default_entities())
    }
}

/// Fallback palette when the host supplies no entity labels
pub fn default_entities() -> Vec<Entity> {
    vec![
        Entity::named("label-1", "Label 1"),
        Entity::named("label-2", "Label 2"),
        Entity::named("label-3", "Label 3"),
        Entity::named("label-4", "Label 4"),
    ]
}
