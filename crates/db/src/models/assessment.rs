use quriousity_core::types::RecordId;
use serde::Serialize;

/// Default status of a catalog assessment.
pub const STATUS_AVAILABLE: &str = "available";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub assessment_type: String,
    pub questions: u32,
    #[serde(rename = "timeEstimate")]
    pub time_estimate: String,
    pub status: String,
    pub requirement: Option<String>,
}
