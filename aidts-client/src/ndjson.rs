use serde::de::DeserializeOwned;

use crate::FetchError;

/// Parse newline-delimited JSON, skipping blank lines.
///
/// `origin` names the source (URL or file) in decode errors; line numbers
/// are 1-based.
pub fn parse_ndjson<T: DeserializeOwned>(text: &str, origin: &str) -> Result<Vec<T>, FetchError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| FetchError::Decode {
                origin: origin.to_string(),
                line: i + 1,
                source,
            })
        })
        .collect()
}
