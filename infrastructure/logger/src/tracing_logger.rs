use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Worker -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Worker -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Worker -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Worker -- ", "{}", message);
    }
}
