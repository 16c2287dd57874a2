//! # arcdump
//!
//! Dumps the contents of binary ArcGIS archive files as human-readable,
//! Markdown-fenced text.
//!
//! ArcGIS ships many of its project and package formats as ordinary
//! containers: zip archives (`.atbx`, `.aprx`), 7-Zip archives (`.gpkx`,
//! `.sd`), and a handful of legacy single-file binary formats (`.tbx`,
//! `.msd`, `.rltx`). This crate walks such a container, auto-detects a
//! content kind for each member by filename suffix, and renders it with
//! format-specific normalization: JSON is re-indented, XML is
//! canonicalized through a tree round-trip, Python source is fenced as
//! code, and anything binary or undecodable falls back to raw bytes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcdump::{Result, dump_zip_contents};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let mut stdout = std::io::stdout().lock();
//!     dump_zip_contents(Path::new("toolbox.atbx"), &mut stdout)?;
//!     Ok(())
//! }
//! ```
//!
//! ## 7-Zip Support
//!
//! The 7-Zip backend is an optional capability behind the `sevenz` feature
//! (enabled by default). Resolve it once at startup and inject it into the
//! walker; without it, 7-Zip containers degrade to whole-file raw output:
//!
//! ```rust,no_run
//! use arcdump::{Result, SevenZipBackend, dump_seven_zip_contents};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let backend = SevenZipBackend::resolve();
//!     let mut stdout = std::io::stdout().lock();
//!     dump_seven_zip_contents(Path::new("layers.gpkx"), backend, &mut stdout)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Archive-level failures (a container
//! that will not open, an empty or undecompressable 7-Zip payload) abort
//! the whole walk; member-level oddities (undecodable bytes, XML that does
//! not parse) degrade gracefully inside the renderer and are reported via
//! [`log`]. The one deliberate exception is malformed JSON, which
//! propagates as [`Error::MalformedJson`].
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `sevenz` | Yes | 7-Zip backend for itemizing 7-Zip containers |
//! | `cli` | No | The `arcdump` command-line tool |

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod detect;
pub mod error;
pub mod render;
pub mod sniff;
pub mod walk;

pub use detect::{DetectedFileType, detect};
pub use error::{Error, Result};
pub use render::{Payload, RenderedEntry, render, write_block};
pub use sniff::{ContainerKind, sniff_container, sniff_path};
pub use walk::{SevenZipBackend, dump_seven_zip_contents, dump_zip_contents};
