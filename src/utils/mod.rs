pub mod download_url;
pub mod logging;
pub mod progress;
