use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards to `tracing`, tagging each event with a component name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "chat_chain", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "chat_chain", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "chat_chain", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "chat_chain", component = self.component, "{}", message);
    }
}
