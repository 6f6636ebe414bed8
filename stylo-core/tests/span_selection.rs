//! Behavioral matrix for the span store over a realistic document,
//! exercising snapping, both granularity modes, and both overlap modes.

use stylo_core::{
    Configuration, Entity, SelectionNode, Span, SpanNode, SpanSelection, TextSelection,
};

const TEXT: &str = include_str!("fixtures/lorem.txt");
const NODE_ID: &str = "node-id";

fn selection(from: isize, to: isize, entity: &str) -> TextSelection {
    let text: String = if from >= 0 && to > from {
        TEXT.chars()
            .skip(from as usize)
            .take((to - from) as usize)
            .collect()
    } else {
        String::new()
    };
    TextSelection {
        from,
        to,
        text,
        entity: Entity::new(entity),
        node: SelectionNode::new(NODE_ID, TEXT),
    }
}

fn span(from: usize, to: usize, entity: &str) -> Span {
    Span {
        from,
        to,
        text: TEXT.chars().skip(from).take(to - from).collect(),
        entity: Entity::new(entity),
        node: SpanNode {
            id: NODE_ID.to_string(),
        },
    }
}

fn word_level() -> Configuration {
    Configuration {
        allow_character: false,
        allow_overlap: false,
    }
}

fn with_overlap() -> Configuration {
    Configuration {
        allow_character: false,
        allow_overlap: true,
    }
}

#[test]
fn auto_completes_ragged_selections_to_tokens() {
    // (raw range, expected range, expected stored text)
    let cases: &[((isize, isize), (usize, usize), &str)] = &[
        ((9, 15), (8, 19), "Lorem Ipsum"),
        ((852, 854), (852, 854), "or"),
        ((5, 8), (5, 7), "is"),
        ((5, 9), (5, 13), "is Lorem"),
        ((7, 10), (8, 13), "Lorem"),
        ((8, 20), (8, 20), "Lorem Ipsum?"),
        ((1865, 1870), (1864, 1871), "1.10.33"),
        ((849, 857), (847, 859), "more-or-less"),
        ((1120, 1136), (1120, 1136), "for 'lorem ipsum"),
        ((1993, 1994), (1993, 1994), "a"),
        ((2132, 2136), (2132, 2136), "amet"),
    ];

    for &((from, to), (want_from, want_to), want_text) in cases {
        let mut store = SpanSelection::new();
        store.add_span(&selection(from, to, "TOKEN"), word_level());

        assert_eq!(
            store.spans(),
            &[span(want_from, want_to, "TOKEN")],
            "selection ({from}, {to})"
        );
        assert_eq!(store.spans()[0].text, want_text, "selection ({from}, {to})");
    }
}

#[test]
fn aligned_selection_with_interior_quote_is_unchanged() {
    // `of "de Finibus Bonorum et Malorum` — quotes at both selection
    // edges are punctuation runs, never extended through
    let mut store = SpanSelection::new();
    store.add_span(&selection(1872, 1911, "TOKEN"), word_level());

    assert_eq!(store.spans(), &[span(1872, 1911, "TOKEN")]);
    assert!(store.spans()[0].text.starts_with("of \"de Finibus"));
    assert!(store.spans()[0].text.ends_with("Malorum"));
}

#[test]
fn character_level_stores_single_whitespace_verbatim() {
    let config = Configuration {
        allow_character: true,
        allow_overlap: false,
    };

    let mut store = SpanSelection::new();
    store.add_span(&selection(4, 5, "TOKEN"), config);

    assert_eq!(store.spans(), &[span(4, 5, "TOKEN")]);
    assert_eq!(store.spans()[0].text, " ");
}

#[test]
fn word_level_rejects_single_whitespace() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(4, 5, "TOKEN"), word_level());

    assert!(store.spans().is_empty());
}

#[test]
fn overlap_mode_keeps_same_range_with_different_entities() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(849, 857, "TOKEN"), with_overlap());
    store.add_span(&selection(849, 857, "TOKEN-2"), with_overlap());

    assert_eq!(
        store.spans(),
        &[span(847, 859, "TOKEN"), span(847, 859, "TOKEN-2")]
    );
}

#[test]
fn overlap_mode_keeps_contained_spans() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(65, 86, "TOKEN"), with_overlap());
    store.add_span(&selection(64, 69, "TOKEN-2"), with_overlap());

    assert_eq!(
        store.spans(),
        &[span(61, 91, "TOKEN"), span(61, 69, "TOKEN-2")]
    );
    assert_eq!(store.spans()[1].text, "printing");
}

#[test]
fn overlap_mode_collapses_exact_duplicates() {
    let mut store = SpanSelection::new();
    for _ in 0..3 {
        store.add_span(&selection(21, 32, "TOKEN"), with_overlap());
    }

    assert_eq!(store.spans(), &[span(21, 32, "TOKEN")]);
    assert_eq!(store.spans()[0].text, "Lorem Ipsum");
}

#[test]
fn overlap_mode_with_character_level_keeps_all() {
    let config = Configuration {
        allow_character: true,
        allow_overlap: true,
    };

    let mut store = SpanSelection::new();
    store.add_span(&selection(61, 91, "TOKEN"), config);
    store.add_span(&selection(61, 69, "TOKEN-2"), config);
    store.add_span(&selection(69, 70, "TOKEN-3"), config);

    assert_eq!(
        store.spans(),
        &[
            span(61, 91, "TOKEN"),
            span(61, 69, "TOKEN-2"),
            span(69, 70, "TOKEN-3"),
        ]
    );
    assert_eq!(store.spans()[2].text, " ");
}

#[test]
fn no_overlap_mode_replaces_subsumed_spans() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(61, 91, "TOKEN"), word_level());
    store.add_span(&selection(55, 97, "TOKEN"), word_level());

    // the wider snapped selection wins and subsumes the narrower one
    assert_eq!(store.spans(), &[span(54, 100, "TOKEN")]);
}

#[test]
fn removes_span_by_value() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(10, 17, "TOKEN"), word_level());

    let expected = span(8, 19, "TOKEN");
    assert_eq!(store.spans(), &[expected.clone()]);

    store.remove_span(&expected);
    assert!(store.spans().is_empty());
}

#[test]
fn replaces_entity_of_matching_span() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(10, 17, "TOKEN"), word_level());

    let target = span(8, 19, "TOKEN");
    let new_entity = Entity::named("TOKEN-2", "TOKEN-2");
    store.replace_entity(&target, new_entity.clone());

    assert_eq!(store.spans()[0].entity, new_entity);
    assert_eq!((store.spans()[0].from, store.spans()[0].to), (8, 19));
}

#[test]
fn replace_entity_misses_leave_store_unchanged() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(10, 17, "TOKEN"), word_level());

    let missing = Span {
        from: 300,
        to: 321,
        text: "xxx".to_string(),
        entity: Entity::new("TOKEN-3"),
        node: SpanNode {
            id: NODE_ID.to_string(),
        },
    };
    store.replace_entity(&missing, Entity::new("TOKEN-2"));

    assert_eq!(store.spans()[0].entity.id, "TOKEN");
}

#[test]
fn rejects_out_of_range_selection_before_snapping() {
    let mut store = SpanSelection::new();
    store.add_span(&selection(-1, 10, "TOKEN"), word_level());

    assert!(store.spans().is_empty());
}
