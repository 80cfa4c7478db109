use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar counting classified questions.
pub fn create_progress_bar(total: usize, message: &str) -> ProgressBar {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create progress bar style")
            .progress_chars("#>-"),
    );
    progress_bar.set_message(message.to_string());
    progress_bar
}

/// Progress bar counting downloaded bytes; a spinner when the size is unknown.
pub fn create_download_progress_bar(total_bytes: Option<u64>) -> ProgressBar {
    match total_bytes {
        Some(total) => {
            let progress_bar = ProgressBar::new(total);
            progress_bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
                    .expect("Failed to create progress bar style")
                    .progress_chars("#>-"),
            );
            progress_bar
        }
        None => {
            let progress_bar = ProgressBar::new_spinner();
            progress_bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {bytes} downloaded ({bytes_per_sec})")
                    .expect("Failed to create progress bar style"),
            );
            progress_bar
        }
    }
}
