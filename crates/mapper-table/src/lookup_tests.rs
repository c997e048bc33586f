use std::io::Write as _;

use mapper_core::{PredicateId, PredicateKind};
use serde_json::{Value, json};

use crate::{LoadError, LoadOptions, LookupTable, MatcherKind, MatcherRef, load_lookup_table};

const SCOPE: i64 = 0;
const CHECK_PATTERN_PREDICATE: i64 = 9;
const CHECK_OPCODE: i64 = 11;
const COMPLETE_MATCH: i64 = 35;

fn table(matchers: Value, patterns: Value, table_size: usize) -> String {
    json!({
        "matchers": matchers,
        "patterns": patterns,
        "predicates": ["HasAVX", "HasSSE2"],
        "pat_predicates": ["Subtarget->is64Bit()"],
        "table_size": table_size,
    })
    .to_string()
}

fn load(text: &str) -> Result<LookupTable, LoadError> {
    LookupTable::from_json_line(text, LoadOptions::default())
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn scope_with_one_child() {
    let text = json!({
        "matchers": [
            {"index": 0, "size": 10, "kind": SCOPE},
            {"index": 1, "size": 3, "kind": CHECK_OPCODE},
        ],
        "patterns": [],
        "predicates": [],
        "pat_predicates": [],
        "table_size": 10,
    })
    .to_string();

    let table = load(&text).unwrap();
    let m = table.matchers();

    assert_eq!(m.len(), 2);
    assert_eq!(m[0].kind(), MatcherKind::Scope);
    assert_eq!((m[0].begin(), m[0].end()), (0, 10));
    assert_eq!(m[1].kind(), MatcherKind::CheckOpcode);
    assert_eq!((m[1].begin(), m[1].end()), (1, 3));
    assert!(m[0].contains(&m[1]));
    assert!(m[0].contains_offset(9));
    assert!(m[1].is_leaf());
    assert_eq!(table.table_size(), 10);
}

#[test]
fn matchers_are_sorted_parents_first() {
    let text = table(
        json!([
            {"index": 4, "size": 2, "kind": CHECK_OPCODE},
            {"index": 1, "size": 3, "kind": CHECK_OPCODE},
            {"index": 0, "size": 8, "kind": SCOPE},
            {"index": 1, "size": 6, "kind": SCOPE},
        ]),
        json!([]),
        8,
    );

    let table = load(&text).unwrap();
    let bounds: Vec<_> = table
        .matchers()
        .iter()
        .map(|m| (m.begin(), m.end()))
        .collect();

    // root end is widened by one
    assert_eq!(bounds, vec![(0, 8), (1, 6), (1, 3), (4, 5)]);
}

#[test]
fn root_covers_last_table_offset() {
    let text = table(
        json!([
            {"index": 1, "size": 2, "kind": CHECK_OPCODE},
            {"index": 0, "size": 5, "kind": SCOPE},
        ]),
        json!([]),
        6,
    );

    let table = load(&text).unwrap();
    let root = table.root().unwrap();

    assert_eq!(root.kind(), MatcherKind::Scope);
    for offset in 0..table.table_size() {
        assert!(root.contains_offset(offset), "offset {offset}");
    }
    for m in &table.matchers()[1..] {
        assert!(root.contains(m));
    }
}

#[test]
fn only_root_is_widened() {
    let text = table(
        json!([
            {"index": 0, "size": 4, "kind": SCOPE},
            {"index": 1, "size": 3, "kind": CHECK_OPCODE},
        ]),
        json!([]),
        4,
    );

    let table = load(&text).unwrap();

    assert_eq!(table.matchers()[0].size(), 5);
    assert_eq!(table.matchers()[1].size(), 3);
}

#[test]
fn complete_match_resolves_pattern() {
    let text = table(
        json!([
            {"index": 0, "size": 6, "kind": SCOPE},
            {"index": 1, "size": 2, "kind": COMPLETE_MATCH, "pattern": 2},
        ]),
        json!([
            {"predicates": []},
            {"predicates": [0]},
            {"predicates": [1, 0]},
        ]),
        6,
    );

    let table = load(&text).unwrap();
    let complete = &table.matchers()[1];

    assert!(complete.has_pattern());
    assert_eq!(complete.pattern_idx(), Some(2));
    let pattern = table.pattern_of(complete).unwrap();
    assert_eq!(pattern.index, 2);
    assert_eq!(
        pattern.named_predicates,
        vec![PredicateId::new(1), PredicateId::new(0)]
    );
    let names: Vec<_> = table.predicate_names(pattern).collect();
    assert_eq!(names, vec!["HasSSE2", "HasAVX"]);
}

#[test]
fn check_pattern_predicate_resolves_text() {
    let text = table(
        json!([
            {"index": 0, "size": 4, "kind": SCOPE},
            {"index": 1, "size": 2, "kind": CHECK_PATTERN_PREDICATE, "predicate": 0},
        ]),
        json!([]),
        4,
    );

    let table = load(&text).unwrap();
    let check = &table.matchers()[1];

    assert_eq!(
        check.reference(),
        MatcherRef::PatternPredicate(PredicateId::new(0))
    );
    assert_eq!(
        table.pattern_predicate_of(check),
        Some("Subtarget->is64Bit()")
    );
}

#[test]
fn back_reference_fields_ignored_for_other_kinds() {
    let text = table(
        json!([
            {"index": 0, "size": 4, "kind": CHECK_OPCODE, "pattern": 0, "predicate": 0},
        ]),
        json!([{"predicates": []}]),
        4,
    );

    let table = load(&text).unwrap();

    assert_eq!(table.matchers()[0].reference(), MatcherRef::None);
}

#[test]
fn patterns_keep_document_order_and_provenance() {
    let text = table(
        json!([]),
        json!([
            {"predicates": [0], "path": "X86InstrSSE.td:120", "pattern": "(add GR32:$a, GR32:$b)"},
            {"predicates": []},
        ]),
        1,
    );

    let table = load(&text).unwrap();
    let patterns = table.patterns();

    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].index, 0);
    assert_eq!(patterns[0].path.as_deref(), Some("X86InstrSSE.td:120"));
    assert_eq!(
        patterns[0].source.as_deref(),
        Some("(add GR32:$a, GR32:$b)")
    );
    assert!(patterns[0].has_provenance());
    assert_eq!(patterns[1].index, 1);
    assert!(!patterns[1].has_provenance());
}

#[test]
fn registry_receives_strings_and_options() {
    let text = table(json!([]), json!([]), 1);
    let options = LoadOptions {
        case_sensitive: false,
        verbosity: 2,
    };

    let table = LookupTable::from_json_line(&text, options).unwrap();
    let reg = table.predicates();

    assert!(!reg.is_case_sensitive());
    assert_eq!(reg.verbosity(), 2);
    assert_eq!(reg.named_len(), 2);
    assert_eq!(reg.pattern_len(), 1);
    assert_eq!(reg.find_named("hasavx"), Some(PredicateId::new(0)));
}

#[test]
fn empty_matcher_list_has_no_root() {
    let text = table(json!([]), json!([]), 0);

    let table = load(&text).unwrap();

    assert!(table.root().is_none());
    assert!(table.matchers().is_empty());
}

#[test]
fn only_first_line_is_read() {
    let text = format!("{}\nthis is not json", table(json!([]), json!([]), 3));

    let table = load(&text).unwrap();

    assert_eq!(table.table_size(), 3);
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(load(""), Err(LoadError::EmptyInput)));
    assert!(matches!(load("\n{}"), Err(LoadError::EmptyInput)));
}

#[test]
fn empty_file_is_rejected() {
    let file = write_temp("");

    let err = LookupTable::from_path(file.path(), LoadOptions::default()).unwrap_err();

    assert!(matches!(err, LoadError::EmptyInput));
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_lookup_table(&path, true, 0).unwrap_err();

    match err {
        LoadError::FileUnreadable { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_document_is_rejected() {
    assert!(matches!(
        load("{\"matchers\": ["),
        Err(LoadError::MalformedDocument(_))
    ));

    // well-formed JSON, missing `table_size`
    let text = json!({
        "matchers": [],
        "patterns": [],
        "predicates": [],
        "pat_predicates": [],
    })
    .to_string();
    assert!(matches!(load(&text), Err(LoadError::MalformedDocument(_))));
}

#[test]
fn unknown_kind_is_rejected() {
    let text = table(json!([{"index": 3, "size": 1, "kind": 99}]), json!([]), 4);

    let err = load(&text).unwrap_err();

    assert!(matches!(err, LoadError::UnknownKind { offset: 3, kind: 99 }));
}

#[test]
fn zero_size_is_rejected() {
    let text = table(
        json!([{"index": 2, "size": 0, "kind": CHECK_OPCODE}]),
        json!([]),
        4,
    );

    assert!(matches!(
        load(&text),
        Err(LoadError::ZeroSize { offset: 2 })
    ));
}

#[test]
fn end_offset_overflow_is_rejected() {
    let past_end = table(
        json!([{"index": usize::MAX, "size": 2, "kind": CHECK_OPCODE}]),
        json!([]),
        4,
    );
    let err = load(&past_end).unwrap_err();
    assert!(matches!(err, LoadError::OffsetOverflow { offset } if offset == usize::MAX));

    let last_byte = table(
        json!([{"index": usize::MAX, "size": 1, "kind": SCOPE}]),
        json!([]),
        4,
    );
    assert!(matches!(
        load(&last_byte),
        Err(LoadError::OffsetOverflow { offset }) if offset == usize::MAX
    ));
}

#[test]
fn root_widening_overflow_is_rejected() {
    let text = table(
        json!([{"index": usize::MAX - 1, "size": 1, "kind": SCOPE}]),
        json!([]),
        4,
    );

    let err = load(&text).unwrap_err();

    assert!(matches!(err, LoadError::OffsetOverflow { offset } if offset == usize::MAX - 1));
    assert_eq!(
        err.to_string(),
        format!(
            "matcher at {}: end offset does not fit in the address range",
            usize::MAX - 1
        )
    );
}

#[test]
fn invalid_utf8_is_malformed_not_unreadable() {
    let mut bytes = br#"{"matchers":[],"patterns":[],"predicates":[""#.to_vec();
    bytes.push(0xff);
    bytes.extend_from_slice(br#""],"pat_predicates":[],"table_size":1}"#);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();

    let err = LookupTable::from_path(file.path(), LoadOptions::default()).unwrap_err();

    assert!(matches!(err, LoadError::MalformedDocument(_)), "{err}");
    assert!(matches!(
        LookupTable::from_json_bytes(&bytes, LoadOptions::default()),
        Err(LoadError::MalformedDocument(_))
    ));
}

#[test]
fn terminal_kind_without_pattern_is_rejected() {
    let text = table(
        json!([{"index": 5, "size": 2, "kind": COMPLETE_MATCH}]),
        json!([{"predicates": []}]),
        8,
    );

    let err = load(&text).unwrap_err();

    assert!(matches!(
        err,
        LoadError::MissingField {
            offset: 5,
            kind: MatcherKind::CompleteMatch,
            field: "pattern",
        }
    ));
    assert_eq!(
        err.to_string(),
        "matcher at 5 (CompleteMatch): missing `pattern` field"
    );
}

#[test]
fn check_pattern_predicate_without_predicate_is_rejected() {
    let text = table(
        json!([{"index": 1, "size": 2, "kind": CHECK_PATTERN_PREDICATE}]),
        json!([]),
        4,
    );

    assert!(matches!(
        load(&text),
        Err(LoadError::MissingField {
            field: "predicate",
            ..
        })
    ));
}

#[test]
fn dangling_pattern_is_rejected() {
    let text = table(
        json!([{"index": 0, "size": 2, "kind": COMPLETE_MATCH, "pattern": 3}]),
        json!([{"predicates": []}]),
        2,
    );

    assert!(matches!(
        load(&text),
        Err(LoadError::PatternOutOfRange {
            offset: 0,
            pattern: 3,
            count: 1,
        })
    ));
}

#[test]
fn dangling_predicates_are_rejected() {
    let named = table(json!([]), json!([{"predicates": [0, 2]}]), 1);
    let err = load(&named).unwrap_err();
    assert!(matches!(
        err,
        LoadError::PredicateOutOfRange {
            kind: PredicateKind::Named,
            count: 2,
            ..
        }
    ));
    assert_eq!(err.to_string(), "named predicate 2 out of range (2 defined)");

    let pattern = table(
        json!([{"index": 0, "size": 2, "kind": CHECK_PATTERN_PREDICATE, "predicate": 1}]),
        json!([]),
        2,
    );
    assert!(matches!(
        load(&pattern),
        Err(LoadError::PredicateOutOfRange {
            kind: PredicateKind::Pattern,
            count: 1,
            ..
        })
    ));
}

#[test]
fn loading_twice_is_idempotent() {
    let file = write_temp(&table(
        json!([
            {"index": 3, "size": 2, "kind": COMPLETE_MATCH, "pattern": 0},
            {"index": 0, "size": 6, "kind": SCOPE},
            {"index": 1, "size": 2, "kind": CHECK_PATTERN_PREDICATE, "predicate": 0},
        ]),
        json!([{"predicates": [1]}]),
        6,
    ));

    let a = load_lookup_table(file.path(), true, 0).unwrap();
    let b = load_lookup_table(file.path(), true, 0).unwrap();

    let records = |t: &LookupTable| -> Vec<_> {
        t.matchers()
            .iter()
            .map(|m| (m.kind(), m.begin(), m.end(), m.reference()))
            .collect()
    };
    assert_eq!(records(&a), records(&b));
    assert_eq!(a.patterns(), b.patterns());
    assert_eq!(a.predicates(), b.predicates());
}
