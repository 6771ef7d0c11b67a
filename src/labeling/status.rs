use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Progress of a station through the labeling process.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "neverSubmitted")]
    NeverSubmitted,
    #[serde(rename = "notSubmitted")]
    NotSubmitted,
    #[serde(rename = "submitted")]
    Submitted,
    #[serde(rename = "acknowledged")]
    Acknowledged,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(rename = "step2ontrack")]
    Step2OnTrack,
    #[serde(rename = "step2approved")]
    Step2Approved,
    #[serde(rename = "step2stalled")]
    Step2Stalled,
    #[serde(rename = "step2delayed")]
    Step2Delayed,
    #[serde(rename = "step3approved")]
    Step3Approved,
}

/// Visual weight a presentation layer gives to a status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Default,
    Info,
    Warning,
    Primary,
    Success,
    Danger,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 11] = [
        Self::NeverSubmitted,
        Self::NotSubmitted,
        Self::Submitted,
        Self::Acknowledged,
        Self::Approved,
        Self::Rejected,
        Self::Step2OnTrack,
        Self::Step2Approved,
        Self::Step2Stalled,
        Self::Step2Delayed,
        Self::Step3Approved,
    ];

    /// Parses an optional wire value; a station without status has never
    /// submitted an application.
    pub fn from_optional(value: Option<&str>) -> Result<Self, StatusError> {
        value.map_or(Ok(Self::NeverSubmitted), str::parse::<Self>)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NeverSubmitted => "neverSubmitted",
            Self::NotSubmitted => "notSubmitted",
            Self::Submitted => "submitted",
            Self::Acknowledged => "acknowledged",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Step2OnTrack => "step2ontrack",
            Self::Step2Approved => "step2approved",
            Self::Step2Stalled => "step2stalled",
            Self::Step2Delayed => "step2delayed",
            Self::Step3Approved => "step3approved",
        }
    }

    /// Short label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NeverSubmitted => "Awaiting Step 1",
            Self::NotSubmitted => "Step 1 returned",
            Self::Submitted => "Step 1 submitted",
            Self::Acknowledged => "Step 1 acknowledged",
            Self::Approved => "Step 1 approved",
            Self::Rejected => "Step 1 rejected",
            Self::Step2OnTrack => "Step 2 on track",
            Self::Step2Approved => "Step 2 approved",
            Self::Step2Stalled => "Step 2 stalled",
            Self::Step2Delayed => "Step 2 delayed",
            Self::Step3Approved => "Label approved",
        }
    }

    /// One-sentence explanation.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NeverSubmitted => "Step 1 application has not been submitted yet",
            Self::NotSubmitted => "Step 1 application was returned for resubmission",
            Self::Submitted => "Step 1 application submitted, waiting for acknowledgment and review",
            Self::Acknowledged => "Step 1 application submission acknowledged, waiting for review",
            Self::Approved => "Step 1 application has been approved!",
            Self::Rejected => "Step 1 application has been rejected!",
            Self::Step2OnTrack => "Step 2 of labeling is on track",
            Self::Step2Approved => "Step 2 of labeling has been approved",
            Self::Step2Stalled => "Step 2 of labeling has been stalled",
            Self::Step2Delayed => "Step 2 of labeling has been delayed",
            Self::Step3Approved => "Labeling is complete!",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::NeverSubmitted => Severity::Default,
            Self::NotSubmitted => Severity::Info,
            Self::Submitted | Self::Step2Delayed => Severity::Warning,
            Self::Acknowledged => Severity::Primary,
            Self::Approved | Self::Step2OnTrack | Self::Step2Approved | Self::Step3Approved => {
                Severity::Success
            }
            Self::Rejected | Self::Step2Stalled => Severity::Danger,
        }
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::Unknown(s.to_string()))
    }
}

/// Errors raised when decoding an application status.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("invalid application status '{0}'")]
    Unknown(String),
}
