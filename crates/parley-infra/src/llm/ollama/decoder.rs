//! Decoder for the Ollama `/api/chat` response body.
//!
//! The body is newline-delimited JSON, one [`OllamaChatChunk`] per line:
//! 1. Each line carries a `message.content` fragment
//! 2. The final line of interest has `done: true`; anything after it is ignored
//! 3. Blank lines may appear anywhere
//!
//! Lines that fail a strict decode (unexpected fields, truncated numbers,
//! stray bytes) are not fatal. A raw scan for a `"content": "..."` pair
//! recovers their text where possible, and lines with nothing recoverable
//! are skipped. Decoding never fails; at worst it yields [`FALLBACK_REPLY`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use parley_types::llm::DecodedReply;

use super::types::OllamaChatChunk;

/// Reply text used when no line yielded any content.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process your request.";

/// A `"content"` key followed by a JSON string literal (escapes allowed).
static CONTENT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""content"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("valid regex")
});

/// Assemble the full reply from a buffered response body.
///
/// Fragments are concatenated in line order without trimming or separators.
pub fn decode(body: &str) -> DecodedReply {
    let mut text = String::new();
    let mut completed = false;

    for (index, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(chunk) => {
                text.push_str(&chunk.message.content);
                if chunk.done {
                    completed = true;
                    break;
                }
            }
            None => match extract_content(line) {
                Some(fragment) => {
                    debug!(line = index, "Recovered content from malformed stream line");
                    text.push_str(&fragment);
                }
                None => debug!(line = index, "Skipped unparseable stream line"),
            },
        }
    }

    if text.is_empty() {
        return DecodedReply {
            text: FALLBACK_REPLY.to_string(),
            completed: false,
        };
    }

    DecodedReply { text, completed }
}

fn parse_line(line: &str) -> Option<OllamaChatChunk> {
    serde_json::from_str(line).ok()
}

/// Pull the first `"content"` string value out of a raw line.
fn extract_content(line: &str) -> Option<String> {
    let raw = CONTENT_FIELD.captures(line)?.get(1)?.as_str();
    // Undo JSON escapes; if the literal itself is mangled, keep it verbatim.
    Some(serde_json::from_str::<String>(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_string()))
}
