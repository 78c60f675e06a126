//! # cedict-reader
//!
//! Loads a CC-CEDICT Chinese-English dictionary file into memory and answers
//! exact lookups by simplified or traditional headword.
//!
//! ```no_run
//! use cedict_reader::{Loader, LoadPolicy};
//!
//! let dict = Loader::new(LoadPolicy::Lenient).load_dir("data")?;
//! if let Some(entry) = dict.first_entry("中华") {
//!     println!("{} [{}] {:?}", entry.traditional(), entry.pinyin(), entry.definitions());
//! }
//! # Ok::<(), cedict_reader::LoadError>(())
//! ```
//!
//! A fresh release can be installed with [`DictFetcher::fetch_latest`];
//! reload afterwards to see it.
pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod parser;

pub use config::{AppConfig, ConfigError};
pub use data::models::{DictEntry, DictError, FetchError, LoadError, LoadPolicy, LoadStats, ParseError};
pub use features::loading::{DICT_FILENAME, Loader, dictionary_exists};
pub use features::maintenance::{CEDICT_URL, DictFetcher, filename_from_url};
pub use features::search::Dictionary;
pub use parser::parse_line;
