use thiserror::Error;

/// Errors raised when a label list is written onto a structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The label list is not aligned with the structure's atoms. Nothing
    /// was written.
    #[error("label count ({labels}) does not match atom count ({atoms})")]
    LengthMismatch { labels: usize, atoms: usize },
}

pub(crate) fn check_length(labels: &[String], atoms: usize) -> Result<(), LabelError> {
    if labels.len() == atoms {
        Ok(())
    } else {
        Err(LabelError::LengthMismatch {
            labels: labels.len(),
            atoms,
        })
    }
}
