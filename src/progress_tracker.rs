use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

pub(crate) struct ProgressTracker {
    progress_bar: ProgressBar,
}

impl ProgressTracker {
    pub(crate) fn new(len: u64, quiet: bool) -> Result<Self> {
        if quiet {
            return Ok(Self {
                progress_bar: ProgressBar::hidden(),
            });
        }

        let progress_bar = ProgressBar::new(len);
        progress_bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
        );

        Ok(Self { progress_bar })
    }

    pub(crate) fn inc(&self) {
        self.progress_bar.inc(1);
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    pub(crate) fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    pub(crate) fn abandon(&self) {
        self.progress_bar.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_tracker_still_counts() -> Result<()> {
        let tracker = ProgressTracker::new(11, true)?;
        tracker.inc();
        tracker.inc();
        assert_eq!(tracker.position(), 2);
        tracker.finish();
        Ok(())
    }
}
