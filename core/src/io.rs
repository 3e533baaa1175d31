//! io.rs
//! Payload loading and all-or-nothing output writes.
//!
//! Design notes:
//! - Outputs are written to a temporary file next to the destination and
//!   renamed into place only after the full write succeeded.
//! - A failed run therefore never leaves a truncated artifact behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::info;

use crate::artifact::Artifact;
use crate::compression::PayloadBytes;
use crate::constants::RAW_DUMP_SUFFIX;
use crate::types::PackError;
use crate::utils::with_suffix;

/// Read the whole payload file. Empty files are rejected.
pub fn read_payload(path: &Path) -> Result<Vec<u8>, PackError> {
    let data = fs::read(path).map_err(|e| PackError::io("read", path, e))?;
    if data.is_empty() {
        return Err(PackError::Config(format!("payload file {} is empty", path.display())));
    }
    Ok(data)
}

/// Sibling path of the raw side-channel dump.
pub fn raw_dump_path(html_path: &Path) -> PathBuf {
    with_suffix(html_path, RAW_DUMP_SUFFIX)
}

/// Write `bytes` to `path` atomically.
///
/// An existing destination keeps its permissions. A new file is created
/// with mode `0o666` minus the process umask, like `File::create`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PackError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    builder.prefix(".jspack").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| PackError::io("create temporary file for", path, e))?;
    tmp.write_all(bytes).map_err(|e| PackError::io("write", path, e))?;
    tmp.as_file().sync_all().map_err(|e| PackError::io("sync", path, e))?;

    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| PackError::io("set permissions on", path, e))?;
    }

    tmp.persist(path).map_err(|e| PackError::io("finalize", path, e.error))?;
    Ok(())
}

/// Persist the bootstrap+payload document.
pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<(), PackError> {
    write_atomic(path, artifact.as_bytes())?;
    info!(path = %path.display(), bytes = artifact.len(), offset = artifact.offset(), "artifact written");
    Ok(())
}

/// Persist the payload alone, no bootstrap.
pub fn write_raw(path: &Path, payload: &PayloadBytes) -> Result<(), PackError> {
    write_atomic(path, payload.as_bytes())?;
    info!(path = %path.display(), bytes = payload.len(), "raw payload written");
    Ok(())
}
