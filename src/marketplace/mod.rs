//! Static catalog of AWS Marketplace resource identifiers for the published
//! SageMaker model packages and algorithms.

mod catalog;

pub use catalog::{
    DRUG_NER, JOB_TITLE_NER, STOPWORD_ALGORITHM, TRANSACTION_DATA_NER, VIDEO_GAMES_NER,
};

use thiserror::Error;

/// A lookup for a region where the resource has not been published
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{resource} is not published in region '{region}'")]
pub struct UnknownRegionError {
    pub resource: &'static str,
    pub region: String,
}

/// Region → marketplace ARN table for one published resource.
///
/// Tables are fixed at compile time and complete only for the regions where
/// the resource has actually been published; anything else is a hard failure.
#[derive(Debug)]
pub struct ArnTable {
    resource: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl ArnTable {
    pub const fn new(
        resource: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { resource, entries }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// Regions the resource is published in
    pub fn regions(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(region, _)| *region)
    }

    /// Look up the marketplace ARN registered for a region.
    pub fn get(&self, region: &str) -> Result<&'static str, UnknownRegionError> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == region)
            .map(|(_, arn)| *arn)
            .ok_or_else(|| UnknownRegionError {
                resource: self.resource,
                region: region.to_string(),
            })
    }
}
