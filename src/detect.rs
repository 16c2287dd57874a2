//! File-type detection based on filename suffixes.
//!
//! This module provides the closed set of content kinds that `arcdump`
//! recognizes inside ArcGIS archives, plus the suffix-driven classifier
//! [`detect`]. Detection is purely lexical: the referenced file does not
//! need to exist and no bytes are ever read.

use std::path::Path;

/// A recognized content kind.
///
/// Each variant carries a canonical lower-case suffix token, returned by
/// [`tag`][Self::tag], which is used both for suffix matching and as the
/// default Markdown fence label.
///
/// The declaration order of the variants is the detection priority: the
/// first tag equal to a filename's suffix wins. [`ALL`][Self::ALL] exposes
/// that order as an explicit array so it stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedFileType {
    /// JSON text (`.json`).
    Json,
    /// XML text (`.xml`, plus the secondary suffixes in [`KNOWN_XML_SUFFIXES`]).
    Xml,
    /// Zip container (`.zip`).
    Zip,
    /// 7-Zip container (`.7z`).
    SevenZip,
    /// Legacy binary toolbox (`.tbx`).
    OldToolbox,
    /// Legacy binary map service definition (`.msd`).
    OldMapServiceDefinition,
    /// Runtime layer package (`.rltx`), an opaque binary blob.
    Rltx,
    /// Python source (`.py`).
    Python,
}

/// Files with these suffixes are expected to be XML despite not carrying
/// an `xml` suffix. Consulted only when no direct tag matches.
pub const KNOWN_XML_SUFFIXES: [&str; 2] = ["rc", "pkinfo"];

/// Files with these suffixes are 7-Zip containers. The core walkers never
/// consult this table; it exists for callers that dispatch on filename when
/// signature sniffing is inconclusive.
pub const KNOWN_SEVEN_ZIP_SUFFIXES: [&str; 2] = ["gpkx", "sd"];

/// Fence labels that differ from the type's own tag.
///
/// Only types whose presentation label diverges from [`DetectedFileType::tag`]
/// belong here. `Python -> "py"` currently equals the tag; it is kept as the
/// documented override point for future additions.
const FENCE_OVERRIDES: &[(DetectedFileType, &str)] = &[(DetectedFileType::Python, "py")];

impl DetectedFileType {
    /// All variants in detection-priority order.
    ///
    /// This ordering is load-bearing: if a future tag were a substring or
    /// alias of another, the earlier variant must keep winning.
    pub const ALL: [DetectedFileType; 8] = [
        DetectedFileType::Json,
        DetectedFileType::Xml,
        DetectedFileType::Zip,
        DetectedFileType::SevenZip,
        DetectedFileType::OldToolbox,
        DetectedFileType::OldMapServiceDefinition,
        DetectedFileType::Rltx,
        DetectedFileType::Python,
    ];

    /// Returns the canonical suffix token for this type.
    ///
    /// Tags are unique and lower-case.
    pub fn tag(self) -> &'static str {
        match self {
            DetectedFileType::Json => "json",
            DetectedFileType::Xml => "xml",
            DetectedFileType::Zip => "zip",
            DetectedFileType::SevenZip => "7z",
            DetectedFileType::OldToolbox => "tbx",
            DetectedFileType::OldMapServiceDefinition => "msd",
            DetectedFileType::Rltx => "rltx",
            DetectedFileType::Python => "py",
        }
    }

    /// Returns whether this type is binary rather than text.
    ///
    /// Binary types are never decoded; their raw bytes are always surfaced
    /// unmodified by the renderer.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            DetectedFileType::OldToolbox
                | DetectedFileType::OldMapServiceDefinition
                | DetectedFileType::SevenZip
                | DetectedFileType::Zip
                | DetectedFileType::Rltx
        )
    }

    /// Returns the Markdown fence label used when presenting content of
    /// this type.
    ///
    /// Looks up [`FENCE_OVERRIDES`] and falls back to [`tag`][Self::tag].
    pub fn fence_label(self) -> &'static str {
        FENCE_OVERRIDES
            .iter()
            .find(|(file_type, _)| *file_type == self)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.tag())
    }
}

impl std::fmt::Display for DetectedFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Detects a file type from a filename suffix.
///
/// The suffix is the substring after the final `.`, compared
/// case-insensitively against each tag in [`DetectedFileType::ALL`] order.
/// When no tag matches, [`KNOWN_XML_SUFFIXES`] is consulted as a fallback.
/// A direct tag match always takes priority over the secondary table.
///
/// Returns `None` when no rule matches, including for filenames without a
/// suffix. Never fails and performs no I/O; the path does not need to exist.
///
/// # Example
///
/// ```rust
/// use arcdump::detect::{DetectedFileType, detect};
///
/// assert_eq!(detect("project.json"), Some(DetectedFileType::Json));
/// assert_eq!(detect("legacy.TBX"), Some(DetectedFileType::OldToolbox));
/// assert_eq!(detect("esriinfo/thumbnail.png"), None);
/// ```
pub fn detect(path: impl AsRef<Path>) -> Option<DetectedFileType> {
    let suffix = path.as_ref().extension()?.to_str()?;

    for file_type in DetectedFileType::ALL {
        if suffix.eq_ignore_ascii_case(file_type.tag()) {
            return Some(file_type);
        }
    }

    if KNOWN_XML_SUFFIXES
        .iter()
        .any(|known| suffix.eq_ignore_ascii_case(known))
    {
        return Some(DetectedFileType::Xml);
    }

    None
}

/// Returns whether a filename carries one of the known 7-Zip container
/// suffixes (`.gpkx`, `.sd`).
pub fn has_seven_zip_suffix(path: impl AsRef<Path>) -> bool {
    let Some(suffix) = path.as_ref().extension().and_then(|s| s.to_str()) else {
        return false;
    };
    KNOWN_SEVEN_ZIP_SUFFIXES
        .iter()
        .any(|known| suffix.eq_ignore_ascii_case(known))
}
