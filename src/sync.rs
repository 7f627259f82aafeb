//! rsync wrapper for mirroring the BibXML collection.

use std::path::Path;
use std::process::Command;

use crate::error::{BibError, Result};

/// Flags passed to rsync: archive, verbose, checksum, itemized, compressed,
/// one-file-system, copy links.
const RSYNC_FLAGS: &str = "-avcizxL";

/// Mirror a remote rsync address into a local directory.
///
/// # Arguments
/// * `remote` - rsync address (e.g., `rsync.ietf.org::bibxml-ids`)
/// * `local` - directory the files are mirrored into
///
/// # Errors
/// [`BibError::Sync`] when rsync cannot be spawned or exits non-zero.
pub fn mirror(remote: &str, local: &Path) -> Result<()> {
    tracing::debug!(remote, local = %local.display(), "running rsync");

    let output = Command::new("rsync")
        .arg(RSYNC_FLAGS)
        .arg(remote)
        .arg(local)
        .output()
        .map_err(|e| BibError::Sync(format!("failed to execute rsync: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BibError::Sync(format!(
            "rsync of {remote} exited with {:?}: {}",
            output.status.code(),
            stderr.trim()
        )));
    }

    Ok(())
}
