use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::data::models::{LoadError, LoadPolicy, LoadStats};
use crate::features::search::Dictionary;
use crate::parser::{is_comment, parse_line};

/// Expected name of the unpacked CEDICT file.
pub const DICT_FILENAME: &str = "cedict_ts.u8";

const BUNDLED_SAMPLE: &str = include_str!("../../data/cedict_sample.u8");

/// Whether `dir` holds a dictionary file under the expected name.
pub fn dictionary_exists(dir: impl AsRef<Path>) -> bool {
    dir.as_ref().join(DICT_FILENAME).is_file()
}

/// Turns a line source into a [`Dictionary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    policy: LoadPolicy,
}

impl Loader {
    pub fn new(policy: LoadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Loads `DICT_FILENAME` from `dir`.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<Dictionary, LoadError> {
        self.load_file(dir.as_ref().join(DICT_FILENAME))
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Dictionary, LoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            log::error!(
                "Dictionary not found at {}. Place {} there or run the fetch command first.",
                path.display(),
                DICT_FILENAME
            );
            return Err(LoadError::MissingResource(path.to_path_buf()));
        }

        log::info!("Loading dictionary from {}", path.display());
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Loads the small sample compiled into the crate.
    pub fn load_bundled(&self) -> Result<Dictionary, LoadError> {
        self.load_reader(BUNDLED_SAMPLE.as_bytes())
    }

    /// Reads lines lazily, skipping comments and blank lines.
    ///
    /// The reader is dropped on every return path, including a strict-policy
    /// abort.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Dictionary, LoadError> {
        let started = Instant::now();
        let mut entries = Vec::new();
        let mut skipped_lines = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if is_comment(&line) || line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(entry) => entries.push(entry),
                Err(source) => {
                    let line_number = index + 1;
                    if self.policy == LoadPolicy::Strict {
                        return Err(LoadError::MalformedEntry {
                            line_number,
                            source,
                        });
                    }
                    log::debug!("Skipping line {}: {}", line_number, source);
                    skipped_lines += 1;
                }
            }
        }

        let stats = LoadStats {
            entries: entries.len(),
            skipped_lines,
            elapsed: started.elapsed(),
        };
        if skipped_lines > 0 {
            log::warn!("Skipped {} malformed dictionary lines", skipped_lines);
        }
        log::info!(
            "Finished loading dictionary. Time: {}ms. Entries: {}",
            stats.elapsed.as_millis(),
            stats.entries
        );

        Ok(Dictionary::with_stats(entries, stats))
    }
}
