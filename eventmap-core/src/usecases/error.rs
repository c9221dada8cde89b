use crate::util::validate::{CriteriaInvalidation, TimeWindowInvalidation};
use eventmap_entities::id::Id;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The end date is before the start date")]
    EndDateBeforeStart,
    #[error("The end time is before the start time on the same date")]
    EndTimeBeforeStartTime,
    #[error("Invalid search radius")]
    InvalidRadius,
    #[error("Unknown location '{0}'")]
    LocationNotFound(String),
    #[error("The physical event {0} has neither a position nor a geocoded position")]
    MissingPosition(Id),
}

impl From<CriteriaInvalidation> for Error {
    fn from(err: CriteriaInvalidation) -> Self {
        match err {
            CriteriaInvalidation::TimeWindow(err) => err.into(),
            CriteriaInvalidation::Radius => Self::InvalidRadius,
        }
    }
}

impl From<TimeWindowInvalidation> for Error {
    fn from(err: TimeWindowInvalidation) -> Self {
        match err {
            TimeWindowInvalidation::EndDateBeforeStartDate => Self::EndDateBeforeStart,
            TimeWindowInvalidation::EndTimeBeforeStartTime => Self::EndTimeBeforeStartTime,
        }
    }
}
