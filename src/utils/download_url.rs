use anyhow::{Context, Result};
use url::Url;

const DRIVE_HOSTS: &[&str] = &["drive.google.com", "docs.google.com"];
const DRIVE_DOWNLOAD_ENDPOINT: &str = "https://drive.google.com/uc";

/// Extracts the file id from a Google Drive sharing link.
///
/// Handles both `uc?id=<id>` / `open?id=<id>` and `file/d/<id>/view` links.
pub fn drive_file_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if !DRIVE_HOSTS.contains(&host) {
        return None;
    }

    if let Some(mut segments) = url.path_segments() {
        if segments.next() == Some("file") && segments.next() == Some("d") {
            if let Some(id) = segments.next().filter(|id| !id.is_empty()) {
                return Some(id.to_string());
            }
        }
    }

    url.query_pairs()
        .find(|(key, value)| key == "id" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Rewrites Google Drive links to the direct download form, skipping the
/// virus-scan confirmation page. Other URLs are returned unchanged.
pub fn resolve_download_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid download URL: {}", url))?;

    let Some(id) = drive_file_id(&parsed) else {
        return Ok(url.to_string());
    };

    let mut direct = Url::parse(DRIVE_DOWNLOAD_ENDPOINT)?;
    direct
        .query_pairs_mut()
        .append_pair("export", "download")
        .append_pair("id", &id)
        .append_pair("confirm", "t");
    Ok(direct.to_string())
}
