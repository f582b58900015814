/// Outcome of the most recent submit attempt.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
