//! Diagnostic message sink port

/// Receives diagnostic messages as the evaluator produces them
///
/// Messages arrive one at a time, in order, before the verdict is returned.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSink {
    /// Accept one formatted diagnostic message
    fn emit(&mut self, message: &str);
}
