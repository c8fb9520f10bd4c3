/// Logging port used by the use cases.
///
/// Implemented by the infrastructure layer so the business crate stays free of
/// any particular logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
