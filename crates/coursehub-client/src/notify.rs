// ABOUTME: User-facing notification hook, the toast surface of the client.
// ABOUTME: Success fires only for mutations that carry a message; errors always fire.

/// Receives user-facing notifications raised by the client. UIs show these
/// as toasts; the default sink writes them to the log.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier that logs through tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "coursehub_client::notify", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "coursehub_client::notify", "{}", message);
    }
}
