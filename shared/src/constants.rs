pub const CACHE_KEY: &str = "ruyWeekly";

pub const QUERY_WEEK: &str = "week";
pub const QUERY_CONDUCTOR: &str = "tc";
pub const QUERY_VIP: &str = "vp";

pub const NOT_DRAWN_YET: &str = "Not drawn yet";
pub const NO_RESULT_MARK: &str = "—";
pub const SHARE_LINK_IDLE: &str = "(the link will appear here after a spin)";
pub const SHARE_LINK_SPINNING: &str = "(spinning...)";
pub const EMPTY_WHEEL_TEXT: &str = "Upload a name list first";

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_CONFIRM_MS: u32 = 1200;

pub const MIN_PARTICIPANTS: usize = 2;
pub const SEGMENT_LABEL_MAX_CHARS: usize = 18;
pub const SEGMENT_COLORS: [&str; 4] = ["#c9a37b", "#b58b63", "#d7c4ab", "#8f6e4c"];

/// Results page file, resolved against the admin page's location.
pub const RESULTS_PAGE_FILE: &str = "index.html";
