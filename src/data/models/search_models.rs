use serde::{Deserialize, Serialize};
use crate::data::models::DictEntry;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub query: String,
    pub results: Vec<DictEntry>,
}

#[derive(Debug, Serialize)]
pub struct FirstEntryResult {
    pub query: String,
    pub entry: Option<DictEntry>,
}

#[derive(Debug, Serialize)]
pub struct ContainsResult {
    pub query: String,
    pub found: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub entries: usize,
    pub skipped_lines: usize,
    pub load_ms: u128,
}
