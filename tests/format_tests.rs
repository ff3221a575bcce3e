use ini_document::{from_str, Error, FormatError};

fn kind_of(text: &str) -> FormatError {
    match from_str(text) {
        Err(Error::Format { kind, .. }) => kind,
        other => panic!("expected a format error for {text:?}, got {other:?}"),
    }
}

#[test]
fn test_scenario_document() {
    let text = "; top comment\n[A]\nk1=v1\nk2=v2=x\n[B]\nk3 = v3\n";
    let doc = from_str(text).unwrap();

    assert_eq!(doc.comments(), ["; top comment"]);
    let a: Vec<_> = doc.section("A").unwrap().iter().collect();
    let b: Vec<_> = doc.section("B").unwrap().iter().collect();
    assert_eq!(a, vec![("k1", "v1"), ("k2", "v2=x")]);
    assert_eq!(b, vec![("k3", "v3")]);

    let rendered = doc.render(true, true);
    println!("Rendered:\n{}", rendered);
    assert_eq!(from_str(&rendered).unwrap(), doc);
}

#[test]
fn test_values_keep_inner_equals_and_spaces() {
    let text = "[S]\nbase64 = aGVsbG8gd29ybGQ=\nsentence = hello   there  \nexpr=a == b";
    let doc = from_str(text).unwrap();
    assert_eq!(doc.get("S", "base64"), Some("aGVsbG8gd29ybGQ="));
    assert_eq!(doc.get("S", "sentence"), Some("hello   there"));
    assert_eq!(doc.get("S", "expr"), Some("a == b"));
}

#[test]
fn test_inline_comment_markers_are_part_of_values() {
    let doc = from_str("[S]\ncolor = #ff0000\nnote = a ; b").unwrap();
    assert_eq!(doc.get("S", "color"), Some("#ff0000"));
    assert_eq!(doc.get("S", "note"), Some("a ; b"));
}

#[test]
fn test_indented_lines() {
    let doc = from_str("    ; indented comment\n  [Indented]\n\t\tkey = value").unwrap();
    assert_eq!(doc.comments(), ["; indented comment"]);
    assert_eq!(doc.get("Indented", "key"), Some("value"));
}

#[test]
fn test_unicode_names_and_values() {
    let doc = from_str("[Größe]\nÄrger = naïve ☕").unwrap();
    assert_eq!(doc.get("GRÖSSE", "ärger"), None);
    assert_eq!(doc.get("größe", "ÄRGER"), Some("naïve ☕"));
}

#[test]
fn test_every_format_error_kind() {
    assert_eq!(kind_of("[A]\n= v"), FormatError::EmptyKey);
    assert_eq!(kind_of("[ ]"), FormatError::EmptySectionName);
    assert_eq!(kind_of("[A]\n[a]"), FormatError::DuplicateSection("a".to_string()));
    assert_eq!(
        kind_of("[A]\nk=1\nK=2"),
        FormatError::DuplicateKey {
            section: "A".to_string(),
            key: "K".to_string()
        }
    );
    assert_eq!(kind_of("k=1"), FormatError::KeyOutsideSection);
    assert_eq!(kind_of("[A]\njunk"), FormatError::InvalidLine("junk".to_string()));
    assert_eq!(kind_of("[x/y]"), FormatError::InvalidName("x/y".to_string()));
}

#[test]
fn test_first_error_wins() {
    let err = from_str("[A]\nbad line\n[A]\n=").unwrap_err();
    assert_eq!(
        err,
        Error::Format {
            line: 2,
            kind: FormatError::InvalidLine("bad line".to_string())
        }
    );
}

#[test]
fn test_line_numbers_count_blank_and_comment_lines() {
    let err = from_str("; one\n\n# three\n[A]\n\nno-equals").unwrap_err();
    assert!(err.to_string().contains("line 6"));
}
