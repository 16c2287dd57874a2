//! Container-kind sniffing based on file signatures (magic bytes).
//!
//! The walkers in [`crate::walk`] trust their caller to have picked the
//! right backend; this module is how the CLI makes that choice. Sniffing
//! reads a fixed-size prefix and restores the reader position afterwards.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;

/// The kind of container a file appears to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Zip container (also covers `.atbx`, `.aprx` and other zip-based
    /// ArcGIS packages).
    Zip,
    /// 7-Zip container (also covers `.gpkx`, `.sd`).
    SevenZip,
    /// No recognized container signature.
    Unknown,
}

impl ContainerKind {
    /// Returns a human-readable name for this container kind.
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Zip => "ZIP",
            ContainerKind::SevenZip => "7-Zip",
            ContainerKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Known container signatures.
const SIGNATURES: &[(&[u8], ContainerKind)] = &[
    // 7z: '7' 'z' 0xBC 0xAF 0x27 0x1C
    (
        &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],
        ContainerKind::SevenZip,
    ),
    // ZIP: 'P' 'K' 0x03 0x04 (local file header)
    (&[0x50, 0x4B, 0x03, 0x04], ContainerKind::Zip),
    // ZIP: 'P' 'K' 0x05 0x06 (empty archive)
    (&[0x50, 0x4B, 0x05, 0x06], ContainerKind::Zip),
];

/// Sniffs the container kind from a reader by examining magic bytes.
///
/// The reader position is restored before returning, whether or not a
/// signature matched.
pub fn sniff_container<R: Read + Seek>(reader: &mut R) -> Result<ContainerKind> {
    let start_pos = reader.stream_position()?;

    let mut header = [0u8; 8];
    let bytes_read = reader.read(&mut header)?;
    reader.seek(SeekFrom::Start(start_pos))?;

    for (signature, kind) in SIGNATURES {
        if bytes_read >= signature.len() && header.starts_with(signature) {
            return Ok(*kind);
        }
    }

    Ok(ContainerKind::Unknown)
}

/// Sniffs the container kind of a file on disk.
pub fn sniff_path(path: impl AsRef<Path>) -> Result<ContainerKind> {
    let mut file = File::open(path)?;
    sniff_container(&mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sniff_7z_signature() {
        let data = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, 0x00, 0x04];
        let mut cursor = Cursor::new(&data);
        assert_eq!(sniff_container(&mut cursor).unwrap(), ContainerKind::SevenZip);
    }

    #[test]
    fn test_sniff_zip_signature() {
        let data = [0x50, 0x4B, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&data);
        assert_eq!(sniff_container(&mut cursor).unwrap(), ContainerKind::Zip);
    }

    #[test]
    fn test_sniff_empty_zip_signature() {
        let data = [0x50, 0x4B, 0x05, 0x06, 0x00, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&data);
        assert_eq!(sniff_container(&mut cursor).unwrap(), ContainerKind::Zip);
    }

    #[test]
    fn test_sniff_unknown() {
        let data = [0x00u8; 8];
        let mut cursor = Cursor::new(&data);
        assert_eq!(sniff_container(&mut cursor).unwrap(), ContainerKind::Unknown);
    }

    #[test]
    fn test_sniff_short_input() {
        let data = [0x50, 0x4B];
        let mut cursor = Cursor::new(&data);
        assert_eq!(sniff_container(&mut cursor).unwrap(), ContainerKind::Unknown);
    }

    #[test]
    fn test_reader_position_restored() {
        let data = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, 0x00, 0x04];
        let mut cursor = Cursor::new(&data);
        cursor.seek(SeekFrom::Start(2)).unwrap();
        let _ = sniff_container(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ContainerKind::SevenZip), "7-Zip");
        assert_eq!(format!("{}", ContainerKind::Zip), "ZIP");
        assert_eq!(format!("{}", ContainerKind::Unknown), "unknown");
    }
}
