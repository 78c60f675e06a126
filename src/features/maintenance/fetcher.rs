use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use zip::ZipArchive;

use crate::data::models::FetchError;
use crate::features::loading::DICT_FILENAME;

/// Where MDBG publishes the current CC-CEDICT release.
pub const CEDICT_URL: &str =
    "https://www.mdbg.net/chindict/export/cedict/cedict_1_0_ts_utf-8_mdbg.zip";

// Scratch names inside the destination, never taken from the URL.
const DOWNLOAD_FILE: &str = ".cedict-download.zip";
const STAGING_DIR: &str = ".cedict-unpack";

/// Last path segment of `url`, without query or fragment.
pub fn filename_from_url(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    last.split(['?', '#']).next().unwrap_or(last)
}

/// Downloads and installs a fresh CEDICT release.
///
/// Never touches an already loaded [`Dictionary`](crate::Dictionary); reload
/// from the destination directory afterwards.
pub struct DictFetcher {
    client: Client,
    url: String,
}

impl DictFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_url(CEDICT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self, FetchError> {
        let url = url.into();
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| FetchError::TransferFailure {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads the archive into `dest`, unpacks it, swaps in the new
    /// dictionary file and deletes the archive.
    ///
    /// Returns the path of the installed dictionary. On any failure the
    /// previous dictionary file in `dest` is left as it was, and no other
    /// file in `dest` is removed.
    pub fn fetch_latest(&self, dest: impl AsRef<Path>) -> Result<PathBuf, FetchError> {
        let dest = dest.as_ref();
        log::info!(
            "Preparing to download {} from {}...",
            filename_from_url(&self.url),
            self.url
        );

        let archive = dest.join(DOWNLOAD_FILE);
        self.download(dest, &archive)?;
        log::info!("CEDICT saved to {}. Unzipping...", archive.display());

        let installed = install(&archive, dest);

        log::info!("Deleting .zip file...");
        if let Err(e) = fs::remove_file(&archive) {
            log::warn!(
                "Could not delete {} after unpacking: {}. Continuing...",
                archive.display(),
                e
            );
        }

        installed
    }

    fn download(&self, dest: &Path, archive: &Path) -> Result<(), FetchError> {
        let transfer = |reason: String| FetchError::TransferFailure {
            url: self.url.clone(),
            reason,
        };

        fs::create_dir_all(dest)
            .map_err(|e| transfer(format!("cannot create {}: {}", dest.display(), e)))?;

        let mut response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| transfer(e.to_string()))?;

        let mut file = File::create(archive)
            .map_err(|e| transfer(format!("cannot write {}: {}", archive.display(), e)))?;
        let bytes = match response.copy_to(&mut file) {
            Ok(bytes) => bytes,
            Err(e) => {
                // Only the partial file created above is cleaned up.
                drop(file);
                if let Err(remove) = fs::remove_file(archive) {
                    log::warn!("Could not remove {}: {}", archive.display(), remove);
                }
                return Err(transfer(e.to_string()));
            }
        };

        log::debug!("Downloaded {} bytes to {}", bytes, archive.display());
        Ok(())
    }
}

/// Unpacks `archive` into a staging directory under `dest`, then moves the
/// dictionary file over the old one. Other archive members are discarded
/// with the staging directory, which is removed afterwards either way.
pub(crate) fn install(archive: &Path, dest: &Path) -> Result<PathBuf, FetchError> {
    let staging = dest.join(STAGING_DIR);
    let result = unpack_into(archive, &staging).and_then(|()| replace_from(&staging, dest, archive));

    if staging.exists() {
        if let Err(e) = fs::remove_dir_all(&staging) {
            log::warn!("Could not remove {}: {}", staging.display(), e);
        }
    }
    result
}

fn unpack_into(archive: &Path, staging: &Path) -> Result<(), FetchError> {
    let unpack = |reason: String| FetchError::UnpackFailure {
        archive: archive.to_path_buf(),
        reason,
    };

    // Leftovers from an interrupted run.
    if staging.exists() {
        fs::remove_dir_all(staging).map_err(|e| unpack(e.to_string()))?;
    }
    fs::create_dir_all(staging).map_err(|e| unpack(e.to_string()))?;

    let file = File::open(archive).map_err(|e| unpack(e.to_string()))?;
    let mut zip = ZipArchive::new(BufReader::new(file)).map_err(|e| unpack(e.to_string()))?;
    zip.extract(staging).map_err(|e| unpack(e.to_string()))?;

    if !staging.join(DICT_FILENAME).is_file() {
        return Err(unpack(format!("archive does not contain {}", DICT_FILENAME)));
    }
    Ok(())
}

fn replace_from(staging: &Path, dest: &Path, archive: &Path) -> Result<PathBuf, FetchError> {
    let unpack = |reason: String| FetchError::UnpackFailure {
        archive: archive.to_path_buf(),
        reason,
    };

    let staged = staging.join(DICT_FILENAME);
    let target = dest.join(DICT_FILENAME);
    if target.exists() {
        log::info!("Replacing old dictionary at {}", target.display());
    }

    // rename replaces atomically on unix; elsewhere clear the target first
    if fs::rename(&staged, &target).is_err() {
        if target.is_file() {
            fs::remove_file(&target).map_err(|e| unpack(e.to_string()))?;
        }
        fs::rename(&staged, &target).map_err(|e| unpack(e.to_string()))?;
    }

    log::info!("Dictionary installed at {}", target.display());
    Ok(target)
}
