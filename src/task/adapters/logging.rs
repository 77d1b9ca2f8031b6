//! Notifier that forwards notices to `tracing`.

use crate::task::ports::Notifier;
use tracing::{info, warn};

/// Notifier for headless hosts that surfaces notices as log events.
///
/// Error notices are logged at `warn`, success notices at `info`, both under
/// the `taskdeck::notice` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        warn!(target: "taskdeck::notice", "{message}");
    }

    fn notify_success(&self, message: &str) {
        info!(target: "taskdeck::notice", "{message}");
    }
}
