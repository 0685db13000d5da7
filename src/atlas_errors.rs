use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Duplicate star name in catalog: {0}")]
    DuplicateName(String),

    #[error("Reference star not found: {0}")]
    ReferenceNotFound(String),

    #[error("Invalid view state: {0}")]
    InvalidViewState(String),

    #[error("Invalid atlas parameter: {0}")]
    InvalidAtlasParameter(String),

    #[error("Invalid orbit sampling grid: {0}")]
    InvalidSamplingGrid(String),

    #[error("Error while reading the star table: {0}")]
    StarTableError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error parsing orbit table at line {line}: {reason}")]
    OrbitTableParse { line: usize, reason: String },

    #[error("Orbit propagation failed for {star}: {reason}")]
    PropagationFailed { star: String, reason: String },
}

impl PartialEq for AtlasError {
    fn eq(&self, other: &Self) -> bool {
        use AtlasError::*;
        match (self, other) {
            (DuplicateName(a), DuplicateName(b)) => a == b,
            (ReferenceNotFound(a), ReferenceNotFound(b)) => a == b,
            (InvalidViewState(a), InvalidViewState(b)) => a == b,
            (InvalidAtlasParameter(a), InvalidAtlasParameter(b)) => a == b,
            (InvalidSamplingGrid(a), InvalidSamplingGrid(b)) => a == b,

            // Wrapped errors are opaque: same variant means equal
            (StarTableError(_), StarTableError(_)) => true,
            (IoError(_), IoError(_)) => true,

            (
                OrbitTableParse { line: la, reason: ra },
                OrbitTableParse { line: lb, reason: rb },
            ) => la == lb && ra == rb,
            (
                PropagationFailed { star: sa, reason: ra },
                PropagationFailed { star: sb, reason: rb },
            ) => sa == sb && ra == rb,

            _ => false,
        }
    }
}
