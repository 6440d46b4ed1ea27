//! Progress reporting while waiting for the remote model

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use llm_qa_application::AskProgressNotifier;
use llm_qa_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr for the duration of one request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AskProgressNotifier for ProgressReporter {
    fn on_request_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Waiting for {}...", model.to_string().cyan()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_request_end(&self, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_and_clear();
        }
    }
}
