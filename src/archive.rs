use crate::constants::{ARCHIVE_FILE_NAME, IMAGE_FILE_PREFIX, RECOVERY_DIR_NAME};
use crate::error::ArchiveError;
use crate::orchestrator::ImagePayload;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

/// `fashion_editorial_{index + 1}.png`, whatever the payload's mime type.
pub fn image_file_name(index: usize) -> String {
    format!("{}{}.png", IMAGE_FILE_PREFIX, index + 1)
}

/// Sibling of `out` that takes the images when `out` itself is unusable.
pub fn recovery_dir(out: &Path) -> PathBuf {
    out.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(RECOVERY_DIR_NAME)
}

/// Bundles the images into one zip, in order. Nothing is returned unless
/// every member was written.
pub fn package_archive(images: &[ImagePayload]) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (index, image) in images.iter().enumerate() {
        let bytes = image
            .decode()
            .map_err(|_| ArchiveError::Decode { index: index + 1 })?;
        zip.start_file(image_file_name(index), options)?;
        zip.write_all(&bytes)?;
    }

    let cursor = zip.finish()?;
    log::debug!("Packaged {} images into archive", images.len());
    Ok(cursor.into_inner())
}

async fn ensure_dir(dir: &Path) -> Result<(), ArchiveError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ArchiveError::Io {
            path: dir.to_path_buf(),
            source,
        })
}

pub async fn write_archive(dir: &Path, images: &[ImagePayload]) -> Result<PathBuf, ArchiveError> {
    let bytes = package_archive(images)?;
    ensure_dir(dir).await?;
    let path = dir.join(ARCHIVE_FILE_NAME);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

pub async fn save_image(
    dir: &Path,
    index: usize,
    image: &ImagePayload,
) -> Result<PathBuf, ArchiveError> {
    let bytes = image
        .decode()
        .map_err(|_| ArchiveError::Decode { index: index + 1 })?;
    let path = dir.join(image_file_name(index));
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

pub async fn save_images(dir: &Path, images: &[ImagePayload]) -> Result<Vec<PathBuf>, ArchiveError> {
    ensure_dir(dir).await?;
    let mut paths = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        paths.push(save_image(dir, index, image).await?);
    }
    Ok(paths)
}
