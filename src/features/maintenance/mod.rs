pub mod fetcher;

pub use fetcher::{CEDICT_URL, DictFetcher, filename_from_url};
