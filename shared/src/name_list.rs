use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::MIN_PARTICIPANTS;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;,]").unwrap());

/// Ordered participant names for one session. Replaced wholesale on every upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantList(Vec<String>);

impl ParticipantList {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// A spin needs at least two names so the VIP can differ from the conductor.
    pub fn can_spin(&self) -> bool {
        self.0.len() >= MIN_PARTICIPANTS
    }
}

/// Turns an uploaded text file into a clean list of names.
///
/// Names may be separated by line breaks, `;` or `,`. Never fails: garbage in
/// gives an empty (or short) list, which simply keeps the spin button disabled.
pub fn parse_names(raw_text: &str, dedupe: bool) -> ParticipantList {
    let text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);
    let text = LINE_BREAKS.replace_all(text, "\n");

    let mut names = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for token in SEPARATORS.split(line) {
            let name = clean_token(token);
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    let names = if dedupe { dedupe_names(names) } else { names };
    log::debug!("Parsed {} names (dedupe: {})", names.len(), dedupe);
    ParticipantList(names)
}

fn clean_token(token: &str) -> &str {
    let token = token.trim();
    let token = strip_quotes(token, '"')
        .or_else(|| strip_quotes(token, '\''))
        .unwrap_or(token);
    token.trim_end_matches(',').trim()
}

fn strip_quotes(token: &str, quote: char) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }
    token.strip_prefix(quote)?.strip_suffix(quote)
}

/// Case-insensitive dedupe keeping the first-seen spelling and order.
pub fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.to_lowercase()))
        .collect()
}
