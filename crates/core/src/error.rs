#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A submitted request is missing a field or carries an invalid one.
    ///
    /// The message names the first offending field and is surfaced to the
    /// caller verbatim.
    #[error("Invalid request: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
