// src/config/consts.rs

// Net config
pub const API_BASE_URL: &str = "https://api.varshade.biz.id/api/search/gsmarena";
pub const ENDPOINT_ENV: &str = "SPEC_LOOKUP_ENDPOINT";
pub const QUERY_PARAM: &str = "query";
pub const TIMEOUT_SECS: u64 = 20;
pub const USER_AGENT: &str = concat!("spec_lookup/", env!("CARGO_PKG_VERSION"));

// Rendering
pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/300x200/cccccc/333333?text=Image+Not+Available";
pub const SHEET_HEADING: &str = "Full Specifications";
pub const SOURCE_LINE: &str = "Source: GSMArena via Varshade API";

/// Spec values equal to this are "not present".
pub const MISSING_VALUE: &str = "-";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "device";
