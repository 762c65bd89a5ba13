use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// System notification sink.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str) -> Result<(), NotifyError>;
}
