//! Status codes for navigation mesh queries

/// Status of a navigation mesh query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation was successful
    Success,
    /// Operation failed due to an unknown reason
    Failure,
    /// Provided parameter was invalid
    InvalidParam,
    /// Polygon reference does not exist in the mesh
    NotFound,
    /// Query stopped before completing, the result is partial
    PartialResult,
}

impl Status {
    /// Checks if the status is a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Checks if the status is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success | Status::PartialResult)
    }
}

impl std::error::Error for Status {}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "Success"),
            Status::Failure => write!(f, "Failure"),
            Status::InvalidParam => write!(f, "Invalid parameter"),
            Status::NotFound => write!(f, "Polygon not found"),
            Status::PartialResult => write!(f, "Partial result"),
        }
    }
}

impl From<Status> for nav_common::Error {
    fn from(status: Status) -> Self {
        nav_common::Error::Navigation(status.to_string())
    }
}
