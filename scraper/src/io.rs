use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;

use crate::error::ApodError;

pub const IMAGE_EXTENSION: &str = "jpg";

/// Turn a caption into a file stem: spaces and slashes become underscores.
///
/// Nothing else is touched, so titles that differ only in those characters
/// map to the same file.
pub fn sanitize_title(title: &str) -> String {
    title.replace(&[' ', '/'][..], "_")
}

pub fn image_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{}.{}", sanitize_title(title), IMAGE_EXTENSION))
}

/// Download `image_url` into `dir`, named after `title`.
///
/// Creates `dir` (and parents) when missing and overwrites any existing file
/// of the same name. A failure while streaming leaves the partial file behind.
pub fn save_image(
    client: &Client,
    dir: &Path,
    image_url: &str,
    title: &str,
) -> Result<PathBuf, ApodError> {
    fs::create_dir_all(dir).map_err(|source| ApodError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;

    log::debug!("GET {}", image_url);
    let mut response = client
        .get(image_url)
        .send()
        .map_err(|source| ApodError::Network {
            url: image_url.to_string(),
            source: source.without_url(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApodError::HttpStatus {
            url: image_url.to_string(),
            status,
        });
    }

    let path = image_path(dir, title);
    let file = File::create(&path).map_err(|source| ApodError::Filesystem {
        path: path.clone(),
        source,
    })?;

    let transfer_error = |source| ApodError::Transfer {
        url: image_url.to_string(),
        path: path.clone(),
        source,
    };
    let mut writer = BufWriter::new(file);
    let bytes = io::copy(&mut response, &mut writer).map_err(transfer_error)?;
    writer.flush().map_err(transfer_error)?;

    log::debug!("wrote {} bytes to {}", bytes, path.display());
    Ok(path)
}
