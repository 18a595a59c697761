use droid_inspect::session::error::InspectError;
use droid_inspect::strings::resources::StringResourceTable;
use serde_json::json;

// =========================================================================
// Reverse lookup
// =========================================================================

#[test]
fn lookup_returns_every_matching_id_in_table_order() {
    let table = StringResourceTable::from_pairs([
        ("app_name", "Demo"),
        ("ok_label", "OK"),
        ("cancel_label", "Cancel"),
        ("confirm_label", "OK"),
    ]);

    assert_eq!(
        table.lookup("OK"),
        vec!["ok_label", "confirm_label"],
        "Duplicate values under different keys all match, in table order"
    );
    assert_eq!(table.lookup("missing"), Vec::<&str>::new());
}

#[test]
fn lookup_either_unions_both_probes() {
    let table = StringResourceTable::from_pairs([
        ("greeting", "Hello"),
        ("farewell", "Bye"),
        ("title", "Hello"),
    ]);

    assert_eq!(
        table.lookup_either(Some("Bye"), Some("Hello")),
        vec!["greeting", "farewell", "title"],
        "Matches against either value, preserving table order"
    );
    assert_eq!(
        table.lookup_either(None, Some("Bye")),
        vec!["farewell"],
        "Absent candidate matches nothing"
    );
    assert_eq!(table.lookup_either(None, None), Vec::<&str>::new());
}

#[test]
fn empty_table_is_inert() {
    let table = StringResourceTable::new();
    assert!(table.is_empty());
    assert_eq!(table.lookup("anything"), Vec::<&str>::new());
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn from_value_keeps_document_order_and_skips_non_strings() {
    let table = StringResourceTable::from_value(&json!({
        "zebra": "Z",
        "alpha": "A",
        "count": 3
    }))
    .unwrap();

    assert_eq!(table.len(), 2, "Non-string values are skipped");
    assert_eq!(table.lookup_either(Some("Z"), Some("A")), vec!["zebra", "alpha"]);
}

#[test]
fn from_value_rejects_non_object_documents() {
    assert!(matches!(
        StringResourceTable::from_value(&json!(["not", "a", "map"])),
        Err(InspectError::MalformedDocument(_))
    ));
}

// =========================================================================
// Identifier validation
// =========================================================================

#[test]
fn validate_id_accepts_table_members_and_namespaced_ids() {
    let table = StringResourceTable::from_pairs([("ok_label", "OK")]);

    assert!(table.validate_id("ok_label").is_ok());
    assert!(
        table.validate_id("android:id/button1").is_ok(),
        "Namespaced resource ids live outside the string table"
    );

    let err = table.validate_id("bogus").unwrap_err();
    assert!(matches!(&err, InspectError::InvalidId(id) if id == "bogus"));
}
