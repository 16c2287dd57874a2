//! Zip container walker.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, error};
use zip::ZipArchive;

use crate::error::{Error, Result};

use super::dump_member;

/// Container-native metadata for one zip member, shown verbatim in the
/// report ahead of the rendered content.
#[derive(Debug)]
struct ZipMemberInfo<'a> {
    name: &'a str,
    size: u64,
    compressed_size: u64,
    crc32: u32,
    is_dir: bool,
}

/// Dumps every member of a zip container to the report stream.
///
/// Opens the container, then per member writes a `## name` heading, a
/// verbatim metadata block, and the rendered content block.
///
/// # Errors
///
/// Returns [`Error::MalformedArchive`] when the container cannot be opened
/// or a member record is unreadable; opening is all-or-nothing and no
/// member output is written in that case. [`Error::MalformedJson`] from a
/// member's content propagates and aborts the walk at that member.
pub fn dump_zip_contents<W: Write>(input_file: &Path, out: &mut W) -> Result<()> {
    debug!("input file: {}", input_file.display());

    let file = File::open(input_file)?;
    let mut archive = ZipArchive::new(file).map_err(|source| {
        let err = Error::MalformedArchive {
            path: input_file.to_path_buf(),
            source,
        };
        error!("there was an issue when attempting to unzip: {}", err);
        err
    })?;

    debug!("{} members within {}", archive.len(), input_file.display());

    for index in 0..archive.len() {
        let mut member = archive.by_index(index).map_err(|source| Error::MalformedArchive {
            path: input_file.to_path_buf(),
            source,
        })?;

        let name = member.name().to_string();
        let info = ZipMemberInfo {
            name: &name,
            size: member.size(),
            compressed_size: member.compressed_size(),
            crc32: member.crc32(),
            is_dir: member.is_dir(),
        };
        let metadata = format!("{:?}", info);

        let mut raw = Vec::with_capacity(member.size() as usize);
        member.read_to_end(&mut raw)?;

        dump_member(out, &name, &raw, Some(&metadata))?;
    }

    Ok(())
}
