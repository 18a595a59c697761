use std::cell::Cell;
use std::rc::Rc;

use droid_inspect::session::context::{InspectSession, NoStrings, StringsProvider};
use droid_inspect::session::error::InspectError;
use droid_inspect::strings::resources::StringResourceTable;
use droid_inspect::tree::model::Dialect;
use serde_json::json;

/// Provider that counts how many times it is asked to load.
struct CountingProvider {
    calls: Rc<Cell<usize>>,
}

impl StringsProvider for CountingProvider {
    fn load(&self) -> Result<StringResourceTable, InspectError> {
        self.calls.set(self.calls.get() + 1);
        Ok(StringResourceTable::from_pairs([("ok_label", "OK")]))
    }
}

// =========================================================================
// String table memoization
// =========================================================================

#[test]
fn session_loads_strings_exactly_once() {
    let calls = Rc::new(Cell::new(0));
    let mut session = InspectSession::new(
        Dialect::Android,
        Box::new(CountingProvider {
            calls: Rc::clone(&calls),
        }),
    );

    assert_eq!(calls.get(), 0, "Loading is lazy");
    session.strings().unwrap();
    session.strings().unwrap();
    session.element_by_id("ok_label").unwrap();
    assert_eq!(calls.get(), 1, "Table is loaded once and memoized");
}

#[test]
fn session_inspect_resolves_ids_against_loaded_strings() {
    let calls = Rc::new(Cell::new(0));
    let mut session = InspectSession::new(
        Dialect::Android,
        Box::new(CountingProvider {
            calls: Rc::clone(&calls),
        }),
    );

    let doc = json!({
        "hierarchy": {
            "@class": "android.widget.Button", "@text": "OK"
        }
    });

    let out = session.inspect(&doc).unwrap();
    assert!(out.contains("  id: ok_label\n"), "Report output: {}", out);
    assert_eq!(calls.get(), 1);
}

#[test]
fn selendroid_session_never_loads_strings() {
    let calls = Rc::new(Cell::new(0));
    let mut session = InspectSession::new(
        Dialect::Selendroid,
        Box::new(CountingProvider {
            calls: Rc::clone(&calls),
        }),
    );

    let doc = json!({
        "children": [
            { "type": "android.widget.TextView", "value": "hi", "shown": true }
        ]
    });

    let out = session.inspect(&doc).unwrap();
    assert!(out.contains("  text: hi\n"));
    assert_eq!(calls.get(), 0, "Selendroid reports do not touch app strings");
}

// =========================================================================
// Element handles
// =========================================================================

#[test]
fn element_by_id_validates_against_the_table() {
    let mut session = InspectSession::new(Dialect::Android, Box::new(NoStrings));

    let handle = session.element_by_id("android:id/button1").unwrap();
    assert_eq!(handle.strategy, "id");
    assert_eq!(handle.value, "android:id/button1");

    assert!(
        matches!(
            session.element_by_id("bogus"),
            Err(InspectError::InvalidId(_))
        ),
        "Unknown, un-namespaced ids are rejected"
    );
}

#[test]
fn dialect_follows_device_name() {
    assert_eq!(Dialect::for_device("Selendroid"), Dialect::Selendroid);
    assert_eq!(Dialect::for_device("selendroid"), Dialect::Selendroid);
    assert_eq!(Dialect::for_device("android"), Dialect::Android);
    assert_eq!(Dialect::for_device("uiautomator"), Dialect::Android);
}
