//! Log-based fallback attribution.
//!
//! Files with no blame lines (empty, binary-ish, generated) are credited to
//! the author of the most recent commit touching them:
//!
//! ```text
//! commit def456...
//! Author: Carol <carol@example.com>
//! Date:   ...
//! ```
//!
//! Only the first entry is read, and always its `Author:` line, whichever
//! identity the blame side uses.

use crate::models::Attribution;

/// Parse the first entry of a log stream into a zero-line attribution.
///
/// Returns `None` when the stream has no `commit` line or no `Author:` line for
/// that entry.
pub fn parse_latest_entry(stream: &str) -> Option<Attribution> {
    let mut lines = stream.lines();
    let hash = lines
        .by_ref()
        .find_map(|line| line.strip_prefix("commit "))?
        .split_whitespace()
        .next()?;

    let person = lines
        .take_while(|line| !line.starts_with("commit "))
        .find_map(|line| line.strip_prefix("Author:"))?;

    Some(Attribution::new(hash, display_name(person), 0))
}

/// Strip the trailing `<email>` token from a log identity line.
fn display_name(person: &str) -> String {
    let person = person.trim();
    let name = match person.rsplit_once(char::is_whitespace) {
        Some((name, email)) if email.starts_with('<') => name.trim_end(),
        _ if person.starts_with('<') => "",
        _ => person,
    };
    quote_name(name)
}

/// A name containing `"` is wrapped in quotes and its first quote doubled.
fn quote_name(name: &str) -> String {
    match name.find('"') {
        Some(at) => format!("\"{}\"{}\"", &name[..at], &name[at..]),
        None => name.to_string(),
    }
}
