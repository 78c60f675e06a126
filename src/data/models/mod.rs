pub mod dict_models;
pub mod error_models;
pub mod search_models;

pub use dict_models::{DictEntry, LoadPolicy, LoadStats};
pub use error_models::{DictError, FetchError, LoadError, ParseError};
pub use search_models::{ContainsResult, FirstEntryResult, LookupParams, LookupResult, StatsResult};
