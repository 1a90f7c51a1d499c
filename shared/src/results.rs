use serde::{Deserialize, Serialize};

use crate::constants::NOT_DRAWN_YET;
use crate::share_link::ShareQuery;
use crate::Result;

/// Last draw seen by the results page, stored as JSON under `CACHE_KEY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResult {
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub conductor: Option<String>,
    #[serde(default)]
    pub vip: Option<String>,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub ts: i64,
}

impl CachedResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// What the results page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub week: Option<String>,
    pub conductor: String,
    pub vip: String,
    /// Fresh record to write back to storage, if the URL carried winners.
    pub to_cache: Option<CachedResult>,
}

impl ResultsView {
    fn not_drawn(week: Option<String>) -> Self {
        Self {
            week,
            conductor: NOT_DRAWN_YET.to_string(),
            vip: NOT_DRAWN_YET.to_string(),
            to_cache: None,
        }
    }

    pub fn week_heading(&self) -> Option<String> {
        self.week.as_ref().map(|week| format!("Week: {}", week))
    }
}

/// Decides what the results page renders.
///
/// URL winners win and are returned for caching. Otherwise the cached record is
/// used; an unreadable cache is treated as no cache at all.
pub fn resolve_results(query: &ShareQuery, cached: Option<&str>, now_ms: i64) -> ResultsView {
    if query.has_winners() {
        let conductor = query.conductor.clone().unwrap_or_default();
        let vip = query.vip.clone().unwrap_or_default();
        return ResultsView {
            week: query.week.clone(),
            conductor: conductor.clone(),
            vip: vip.clone(),
            to_cache: Some(CachedResult {
                week: query.week.clone(),
                conductor: Some(conductor),
                vip: Some(vip),
                ts: now_ms,
            }),
        };
    }

    let Some(raw) = cached else {
        return ResultsView::not_drawn(query.week.clone());
    };

    match CachedResult::from_json(raw) {
        Ok(saved) => ResultsView {
            week: saved.week.filter(|w| !w.is_empty()).or_else(|| query.week.clone()),
            conductor: non_empty_or_placeholder(saved.conductor),
            vip: non_empty_or_placeholder(saved.vip),
            to_cache: None,
        },
        Err(e) => {
            log::warn!("Ignoring cached result: {}", e);
            ResultsView::not_drawn(query.week.clone())
        }
    }
}

fn non_empty_or_placeholder(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NOT_DRAWN_YET.to_string())
}
