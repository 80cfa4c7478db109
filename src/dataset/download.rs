//! Fetching the raw dataset over HTTP.
//!
//! Bodies are streamed to `<file>.part` and renamed once complete, so an
//! interrupted download never leaves a truncated dataset behind.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use indicatif::ProgressBar;
use log::{debug, info};

use crate::utils::download_url::resolve_download_url;
use crate::utils::progress::create_download_progress_bar;

const USER_AGENT: &str = concat!("jeopardy-curate/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const READ_TIMEOUT: Duration = Duration::from_secs(300);

/// Bytes inspected when checking whether a body is an HTML page.
const SNIFF_LEN: usize = 512;

/// Downloads `url` to `destination`, returning the number of bytes written.
pub fn download_file(url: &str, destination: &Path) -> Result<u64> {
    let resolved = resolve_download_url(url)?;
    if resolved != url {
        debug!("Resolved {} to {}", url, resolved);
    }

    let response = ureq::AgentBuilder::new()
        .user_agent(USER_AGENT)
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(READ_TIMEOUT)
        .build()
        .get(&resolved)
        .call()
        .with_context(|| format!("Failed to download {}", url))?;

    if response.content_type() == "text/html" {
        return Err(html_error(url));
    }

    let total_bytes = response
        .header("Content-Length")
        .and_then(|value| value.parse::<u64>().ok());
    let progress_bar = create_download_progress_bar(total_bytes);
    let result = save_stream(response.into_reader(), destination, &progress_bar)
        .with_context(|| format!("Failed to download {}", url));
    progress_bar.finish_and_clear();

    let bytes = result?;
    info!("Downloaded {} bytes to {}", bytes, destination.display());
    Ok(bytes)
}

/// Streams `reader` into `destination` through a `.part` file.
///
/// The partial file is removed on any error, including a body that turns out
/// to be an HTML page rather than data.
pub fn save_stream<R: Read>(reader: R, destination: &Path, progress_bar: &ProgressBar) -> Result<u64> {
    let partial = partial_path(destination);
    let result = write_partial(reader, &partial, progress_bar).and_then(|bytes| {
        if starts_with_html(&partial)? {
            return Err(anyhow!(
                "Received an HTML page instead of data; the link may require \
                 confirmation or may not be publicly shared"
            ));
        }
        fs::rename(&partial, destination).with_context(|| {
            format!(
                "Failed to move {} to {}",
                partial.display(),
                destination.display()
            )
        })?;
        Ok(bytes)
    });

    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

pub fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}

/// Whether the leading bytes of a body look like an HTML document.
pub fn looks_like_html(prefix: &[u8]) -> bool {
    let text = String::from_utf8_lossy(prefix);
    let trimmed = text.trim_start_matches('\u{feff}').trim_start().to_ascii_lowercase();
    trimmed.starts_with("<!doctype html") || trimmed.starts_with("<html")
}

fn write_partial<R: Read>(reader: R, partial: &Path, progress_bar: &ProgressBar) -> Result<u64> {
    let file = File::create(partial)
        .with_context(|| format!("Failed to create {}", partial.display()))?;
    let mut writer = BufWriter::new(file);
    let mut reader = progress_bar.wrap_read(reader);
    let bytes = io::copy(&mut reader, &mut writer)
        .with_context(|| format!("Failed to write {}", partial.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", partial.display()))?;
    Ok(bytes)
}

fn starts_with_html(path: &Path) -> Result<bool> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut prefix)?;
    Ok(looks_like_html(&prefix))
}

fn html_error(url: &str) -> anyhow::Error {
    anyhow!(
        "Received an HTML page instead of data from {}; the link may require \
         confirmation or may not be publicly shared",
        url
    )
}
