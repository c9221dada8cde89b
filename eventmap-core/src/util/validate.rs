use crate::{
    usecases::{LocationFilter, SearchCriteria},
    util::time::TimeWindow,
};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeWindowInvalidation {
    #[error("The end date is before the start date")]
    EndDateBeforeStartDate,
    #[error("The end time is before the start time on the same date")]
    EndTimeBeforeStartTime,
}

impl Validate for TimeWindow {
    type Error = TimeWindowInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let Some(end) = self.end else {
            return Ok(());
        };
        if end.date() < self.start.date() {
            return Err(Self::Error::EndDateBeforeStartDate);
        }
        if end.date() == self.start.date() && end.time() < self.start.time() {
            return Err(Self::Error::EndTimeBeforeStartTime);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaInvalidation {
    #[error(transparent)]
    TimeWindow(TimeWindowInvalidation),
    #[error("The search radius must be a positive number")]
    Radius,
}

impl Validate for SearchCriteria {
    type Error = CriteriaInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        self.window.validate().map_err(Self::Error::TimeWindow)?;
        if let LocationFilter::Physical(Some(area)) = &self.location {
            let km = area.radius.to_kilometers();
            if !km.is_finite() || km <= 0.0 {
                return Err(Self::Error::Radius);
            }
        }
        Ok(())
    }
}
