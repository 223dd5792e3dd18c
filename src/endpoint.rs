// --- URL Construction ---

/// Fixed path of the drive-index cron endpoint, appended to the site base URL.
pub const DRIVE_INDEX_PATH: &str = "/api/cron/drive-index";

/// Derives the trigger URL from the site base URL.
///
/// All trailing `/` characters are stripped before the fixed path is
/// appended, so `https://example.com` and `https://example.com/` derive the
/// same URL. The base is not validated beyond that; a malformed base surfaces
/// later as a transport error.
#[must_use]
pub fn trigger_url(site_url: &str) -> String {
    format!("{}{DRIVE_INDEX_PATH}", site_url.trim_end_matches('/'))
}
