use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::data::models::*;
use crate::features::search::Dictionary;

pub async fn lookup_api(
    Query(params): Query<LookupParams>,
    State(dict): State<Arc<Dictionary>>,
) -> Json<LookupResult> {
    let results = dict
        .all_entries(&params.q)
        .into_iter()
        .cloned()
        .collect();

    Json(LookupResult {
        query: params.q,
        results,
    })
}

pub async fn first_entry_api(
    Query(params): Query<LookupParams>,
    State(dict): State<Arc<Dictionary>>,
) -> Json<FirstEntryResult> {
    let entry = dict.first_entry(&params.q).cloned();
    Json(FirstEntryResult {
        query: params.q,
        entry,
    })
}

pub async fn contains_api(
    Query(params): Query<LookupParams>,
    State(dict): State<Arc<Dictionary>>,
) -> Json<ContainsResult> {
    let found = dict.contains(&params.q);
    Json(ContainsResult {
        query: params.q,
        found,
    })
}

pub async fn stats_api(State(dict): State<Arc<Dictionary>>) -> Json<StatsResult> {
    let stats = dict.stats();
    Json(StatsResult {
        entries: stats.entries,
        skipped_lines: stats.skipped_lines,
        load_ms: stats.elapsed.as_millis(),
    })
}
