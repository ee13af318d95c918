/**
 * Cover Image Uploads
 *
 * Uploaded files first land in the upload directory under a random,
 * extension-less temporary name. `normalize` then gives them their final
 * name: the NFC form of the temporary path plus the extension of the
 * filename the client submitted.
 */

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::backend::error::UploadError;

/// Extension of a client-submitted filename
///
/// Everything after the last `.`. A name without any `.` is returned whole.
pub fn extension_of(original_filename: &str) -> &str {
    original_filename
        .rsplit('.')
        .next()
        .unwrap_or(original_filename)
}

/// Final path for an upload stored at `temp_path`
pub fn normalized_path(temp_path: &Path, original_filename: &str) -> PathBuf {
    let normalized: String = temp_path.to_string_lossy().nfc().collect();
    PathBuf::from(format!("{}.{}", normalized, extension_of(original_filename)))
}

/// Write uploaded bytes under a fresh temporary name in `upload_dir`
///
/// Names are random UUIDs, so concurrent uploads never share a path.
pub async fn store_temp_file(upload_dir: &Path, bytes: &[u8]) -> Result<PathBuf, UploadError> {
    let path = upload_dir.join(Uuid::new_v4().simple().to_string());

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| UploadError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Move an upload to its final, extension-bearing path
///
/// # Returns
/// The final path, to be persisted as the post's cover
///
/// # Errors
/// `UploadError::RenameFailed` when the source is missing, the destination
/// is not writable or the move would cross devices.
pub async fn normalize(temp_path: &Path, original_filename: &str) -> Result<PathBuf, UploadError> {
    let final_path = normalized_path(temp_path, original_filename);

    tokio::fs::rename(temp_path, &final_path)
        .await
        .map_err(|source| UploadError::RenameFailed {
            from: temp_path.to_path_buf(),
            to: final_path.clone(),
            source,
        })?;

    tracing::debug!("Stored upload at {}", final_path.display());
    Ok(final_path)
}
