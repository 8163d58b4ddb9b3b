use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under the `recommender` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recommender", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recommender", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recommender", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recommender", "{}", message);
    }
}
