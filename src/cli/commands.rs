use serde_json::Value;

use crate::report::fingerprint::report_fingerprint;
use crate::session::context::{InspectSession, NoStrings, StringsProvider};
use crate::source::server::{FileStrings, SourceClient, load_document};
use crate::tree::model::Dialect;

// ============================================================================
// page subcommand
// ============================================================================

/// Inspect the current screen and print its interesting elements.
pub fn cmd_page(
    input: Option<&str>,
    server: Option<&str>,
    device: &str,
    strings_path: Option<&str>,
    fingerprint: bool,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let dialect = Dialect::for_device(device);
    let doc = fetch_document(input, server, verbose)?;

    let provider = strings_provider(strings_path, server);
    let mut session = InspectSession::new(dialect, provider);

    let report = session.inspect(&doc)?;
    print!("{}", report);

    if fingerprint {
        println!("fingerprint: {}", report_fingerprint(&report));
    }

    Ok(())
}

// ============================================================================
// classes subcommand
// ============================================================================

/// Count widget classes on the current screen.
pub fn cmd_classes(
    input: Option<&str>,
    server: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = fetch_document(input, server, verbose)?;
    let session = InspectSession::new(Dialect::Android, Box::new(NoStrings));

    print!("{}", session.class_histogram(&doc)?);
    Ok(())
}

// ============================================================================
// find subcommand
// ============================================================================

/// Print the search request a tag alias expands to.
pub fn cmd_find(
    tag: &str,
    attribute: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = InspectSession::new(Dialect::Android, Box::new(NoStrings));
    let request = session.find_by_tag(tag, attribute)?;

    if verbose > 0 {
        eprintln!(
            "Tag '{}' expands to {} class selector(s)",
            tag,
            request.selectors.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&request.to_args())?);
    Ok(())
}

// ============================================================================
// id subcommand
// ============================================================================

/// Resolve an identifier against the app's string resources.
pub fn cmd_id(
    id: &str,
    strings_path: Option<&str>,
    server: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = strings_provider(strings_path, server);
    let mut session = InspectSession::new(Dialect::Android, provider);

    let handle = session.element_by_id(id)?;
    println!("{}: {}", handle.strategy, handle.value);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load the source tree from a dump file, or fetch it from the server.
fn fetch_document(
    input: Option<&str>,
    server: Option<&str>,
    verbose: u8,
) -> Result<Value, Box<dyn std::error::Error>> {
    match (input, server) {
        (Some(path), _) => {
            if verbose > 0 {
                eprintln!("Loading source tree from {}", path);
            }
            Ok(load_document(path)?)
        }
        (None, Some(endpoint)) => {
            if verbose > 0 {
                eprintln!("Fetching source tree from {}", endpoint);
            }
            Ok(SourceClient::new(endpoint).fetch_source()?)
        }
        (None, None) => Err("no source: pass --input <file> or --server <url>".into()),
    }
}

/// Pick the strings provider: explicit file beats server, server beats none.
fn strings_provider(
    strings_path: Option<&str>,
    server: Option<&str>,
) -> Box<dyn StringsProvider> {
    match (strings_path, server) {
        (Some(path), _) => Box::new(FileStrings {
            path: path.to_string(),
        }),
        (None, Some(endpoint)) => Box::new(SourceClient::new(endpoint)),
        (None, None) => Box::new(NoStrings),
    }
}
