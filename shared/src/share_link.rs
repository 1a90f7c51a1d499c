use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::constants::{QUERY_CONDUCTOR, QUERY_VIP, QUERY_WEEK, RESULTS_PAGE_FILE};
use crate::Result;

/// Values carried by a share link. Any of them may be missing on a hand-edited URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareQuery {
    pub week: Option<String>,
    pub conductor: Option<String>,
    pub vip: Option<String>,
}

impl ShareQuery {
    /// Both winners present and non-empty.
    pub fn has_winners(&self) -> bool {
        matches!((&self.conductor, &self.vip), (Some(c), Some(v)) if !c.is_empty() && !v.is_empty())
    }
}

/// Results page that sits next to `current_page`, so a copy hosted under a
/// sub-path links to its own results page.
pub fn results_page_for(current_page: &str) -> Result<String> {
    let mut page = Url::parse(current_page)?.join(RESULTS_PAGE_FILE)?;
    page.set_query(None);
    page.set_fragment(None);
    Ok(page.to_string())
}

/// Builds the link to the results page for one draw.
///
/// Existing query parameters on `results_page` are replaced.
pub fn build_share_url(
    results_page: &str,
    week: &str,
    conductor: &str,
    vip: &str,
) -> Result<String> {
    let mut url = Url::parse(results_page)?;
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(QUERY_WEEK, week)
        .append_pair(QUERY_CONDUCTOR, conductor)
        .append_pair(QUERY_VIP, vip);
    Ok(url.to_string())
}

/// Decodes a `location.search` string (leading `?` optional).
///
/// Empty values count as missing. When a key repeats, the first one wins.
pub fn decode_share_query(search: &str) -> ShareQuery {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut query = ShareQuery::default();

    for (key, value) in form_urlencoded::parse(search.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let slot = match key.as_ref() {
            QUERY_WEEK => &mut query.week,
            QUERY_CONDUCTOR => &mut query.conductor,
            QUERY_VIP => &mut query.vip,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    query
}

/// Decodes the query part of a full share URL.
pub fn decode_share_url(share_url: &str) -> Result<ShareQuery> {
    let url = Url::parse(share_url)?;
    Ok(decode_share_query(url.query().unwrap_or("")))
}
