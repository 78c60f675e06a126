pub mod loader;

pub use loader::{DICT_FILENAME, Loader, dictionary_exists};
