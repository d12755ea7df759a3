//! Progress indicators for commands that wait on the network.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

/// Create a spinner for an indeterminate network wait.
///
/// Call `finish_and_clear` before printing results so the spinner does
/// not linger in the output.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Create a spinner unless machine-readable output was requested, in
/// which case a hidden bar is returned so call sites stay unconditional.
pub fn maybe_spinner(message: &str, json: bool) -> ProgressBar {
    if json {
        ProgressBar::hidden()
    } else {
        create_spinner(message)
    }
}
