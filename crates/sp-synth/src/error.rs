use sp_census::CensusError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    /// A boundary has no census entry, or a census source failed to load.
    #[error(transparent)]
    Census(#[from] CensusError),

    #[error("district {0:?} defined more than once")]
    DuplicateDistrict(String),

    #[error("no workplace capacity available for an inhabitant of {home:?}")]
    NoWorkplaceCapacity { home: String },

    #[error("{inhabitants} inhabitants to place but only {workplaces} workplaces available")]
    CapacityMismatch {
        inhabitants: u64,
        workplaces:  u64,
    },

    #[error("district {district:?} has inhabitants or workplaces but no network nodes")]
    NoNodes { district: String },

    #[error("invalid empirical distribution: {0}")]
    InvalidDistribution(String),

    #[error("invalid timing: {0}")]
    InvalidTiming(String),
}

pub type SynthResult<T> = Result<T, SynthError>;
