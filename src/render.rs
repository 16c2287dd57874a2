//! Content decoding and normalization for archive members.
//!
//! Given a member's raw bytes, [`render`] decides whether they are text or
//! binary, normalizes recognized text formats, and picks the Markdown fence
//! label for presentation. [`write_block`] then frames the result on the
//! report stream. The two calls are kept separate so walkers can emit their
//! own per-member headers in between, but a render is always followed
//! immediately by its write with no intervening mutation.
//!
//! Failure policy is deliberately asymmetric:
//!
//! - undecodable bytes degrade to a binary payload (not an error),
//! - malformed XML degrades, retrying the content as JSON first,
//! - malformed JSON propagates as [`Error::MalformedJson`], because a
//!   `json` suffix is treated as a reliable classification.

use std::io::Write;

use log::{debug, warn};
use xmltree::{Element, EmitterConfig};

use crate::detect::{DetectedFileType, detect};
use crate::error::{Error, Result};

/// The rendered form of a member's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Decoded (and possibly normalized) text.
    Text(String),
    /// Original bytes, surfaced unmodified.
    Binary(Vec<u8>),
}

/// One rendered archive member, produced by [`render`] and consumed by
/// [`write_block`]. Ephemeral: instances live only for the duration of a
/// report write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// The resolved content kind, if any rule matched.
    pub file_type: Option<DetectedFileType>,
    /// The text or binary payload.
    pub payload: Payload,
    /// The fence label for the text block; empty for unknown or binary
    /// content.
    pub fence: &'static str,
}

/// Renders a member's raw bytes into presentable form.
///
/// When `declared` is absent and `filename` is present, the type is
/// inferred via [`detect`]. Binary types short-circuit to an unmodified
/// byte payload. Everything else is decoded as UTF-8 (falling back to
/// bytes on failure) and normalized according to the resolved type.
///
/// # Errors
///
/// Returns [`Error::MalformedJson`] when content classified as JSON does
/// not parse. All other degraded outcomes are reported via `log` and
/// folded into the returned entry.
///
/// # Example
///
/// ```rust
/// use arcdump::render::{Payload, render};
///
/// let entry = render(br#"{"a":1}"#, Some("item.json"), None).unwrap();
/// assert_eq!(entry.fence, "json");
/// assert_eq!(entry.payload, Payload::Text("{\n  \"a\": 1\n}".into()));
/// ```
pub fn render(
    raw: &[u8],
    filename: Option<&str>,
    declared: Option<DetectedFileType>,
) -> Result<RenderedEntry> {
    let file_type = declared.or_else(|| filename.and_then(detect));
    if let (Some(t), Some(name)) = (file_type, filename) {
        debug!("{} type resolved for {}", t, name);
    }

    // Known binary types are never decoded; surface the bytes as-is.
    if file_type.is_some_and(DetectedFileType::is_binary) {
        return Ok(RenderedEntry {
            file_type,
            payload: Payload::Binary(raw.to_vec()),
            fence: "",
        });
    }

    let text = match String::from_utf8(raw.to_vec()) {
        Ok(text) => text,
        Err(e) => {
            // Degraded but successful: not text after all.
            warn!(
                "could not decode {} as UTF-8: {}",
                filename.unwrap_or("<unnamed>"),
                e.utf8_error()
            );
            return Ok(RenderedEntry {
                file_type,
                payload: Payload::Binary(raw.to_vec()),
                fence: "",
            });
        }
    };

    let fence = file_type.map(DetectedFileType::fence_label).unwrap_or("");

    let text = match file_type {
        Some(DetectedFileType::Json) => normalize_json(&text)?,
        Some(DetectedFileType::Xml) => normalize_xml(&text),
        _ => text,
    };

    Ok(RenderedEntry {
        file_type,
        payload: Payload::Text(text),
        fence,
    })
}

/// Re-serializes JSON text with a fixed 2-space indentation.
fn normalize_json(text: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value).map_err(Error::from)
}

/// Canonicalizes XML text by round-tripping it through an element tree.
///
/// Suffix-based XML classification is heuristic, so this path is strictly
/// more lenient than JSON handling: on parse failure the content is
/// retried as JSON (tolerating mislabeled files), and if that also fails
/// the original text is returned unchanged.
fn normalize_xml(text: &str) -> String {
    let root = match Element::parse(text.as_bytes()) {
        Ok(root) => root,
        Err(e) => {
            let head: String = text.chars().take(20).collect();
            warn!("failed to parse XML from {:?}: {}", head, e);
            return match normalize_json(text) {
                Ok(json) => json,
                Err(j_err) => {
                    warn!("JSON reinterpretation also failed: {}", j_err);
                    text.to_string()
                }
            };
        }
    };

    let config = EmitterConfig::new().write_document_declaration(false);
    let mut buf = Vec::new();
    match root.write_with_config(&mut buf, config) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => {
            warn!("failed to re-serialize XML tree: {}", e);
            text.to_string()
        }
    }
}

/// Writes a rendered entry to the report stream as a delimited block.
///
/// Text payloads are framed as a Markdown code fence carrying the entry's
/// fence label. Binary payloads are framed as a bare fence around an
/// ASCII-escaped rendering of the bytes.
pub fn write_block<W: Write>(out: &mut W, entry: &RenderedEntry) -> std::io::Result<()> {
    match &entry.payload {
        Payload::Text(text) => {
            write!(out, "\n```{}\n{}\n```\n\n", entry.fence, text)
        }
        Payload::Binary(bytes) => {
            write!(out, "```\n{}\n```\n\n", bytes.escape_ascii())
        }
    }
}
