//! Archive traversal and report writing.
//!
//! A walker opens one container, iterates its members, classifies and
//! renders each via [`crate::render`], and writes a structured report to a
//! single output stream: per member, a heading line, an optional verbatim
//! metadata block, then the rendered content block.
//!
//! Failure isolation is per container, not per member. If the container
//! cannot be opened the whole walk fails with one archive-level error and
//! no member output; once open, a member only degrades to the extent the
//! renderer itself degrades. There is no member-level catch-and-continue,
//! no pause/resume, and no internal locking: walkers are synchronous and
//! callers needing parallelism must serialize per container.

mod sevenz;
mod zip;

pub use sevenz::{SevenZipBackend, dump_seven_zip_contents};
pub use zip::dump_zip_contents;

use std::io::Write;

use crate::error::Result;
use crate::render::{render, write_block};

/// Writes the report section for one member: heading, then rendered block.
///
/// Shared by both walker variants. The zip walker writes its
/// container-native metadata block between the heading and the content,
/// via the `metadata` closure.
fn dump_member<W: Write>(
    out: &mut W,
    name: &str,
    raw: &[u8],
    metadata: Option<&str>,
) -> Result<()> {
    writeln!(out, "## {}\n", name)?;
    if let Some(metadata) = metadata {
        write!(out, "\n```\n{}\n```\n\n", metadata)?;
    }
    let entry = render(raw, Some(name), None)?;
    write_block(out, &entry)?;
    Ok(())
}
