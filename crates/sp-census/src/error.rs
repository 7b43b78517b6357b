use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    #[error("district {0:?} not found in census")]
    DistrictNotFound(String),

    #[error("duplicate census entry for district {0:?}")]
    DuplicateEntry(String),

    #[error("census parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CensusResult<T> = Result<T, CensusError>;
