//! Analysis request and result records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One uploaded document payload, created per call and consumed by the
/// analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Content type declared by the transport layer.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

/// The six structured fields extracted from a title policy document.
///
/// Every slot is optional; an absent field stays `None` and serializes as
/// an explicit `null` so downstream consumers always see all six keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyFields {
    /// Policy effective date, as written in the document.
    pub effective_date: Option<String>,
    /// Name of the insured party or parties.
    pub insured_party: Option<String>,
    /// Insurance company or underwriter name.
    pub underwriter: Option<String>,
    /// Legal description of the property.
    pub legal_description: Option<String>,
    /// Exceptions or exclusions listed in the policy.
    pub exceptions: Option<String>,
    /// Policy coverage amount.
    pub policy_amount: Option<String>,
}

impl PolicyFields {
    /// Build a field record from a parsed JSON object.
    ///
    /// String values are taken as-is and bare numbers are stringified
    /// (models sometimes emit the policy amount as a number). Any other
    /// shape for a slot, and any missing key, counts as absent. Extra
    /// keys in the object are ignored.
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self {
            effective_date: field_string(value, "effective_date"),
            insured_party: field_string(value, "insured_party"),
            underwriter: field_string(value, "underwriter"),
            legal_description: field_string(value, "legal_description"),
            exceptions: field_string(value, "exceptions"),
            policy_amount: field_string(value, "policy_amount"),
        }
    }

    /// True when none of the six slots hold a value.
    pub fn is_empty(&self) -> bool {
        self.effective_date.is_none()
            && self.insured_party.is_none()
            && self.underwriter.is_none()
            && self.legal_description.is_none()
            && self.exceptions.is_none()
            && self.policy_amount.is_none()
    }
}

fn field_string(value: &serde_json::Value, key: &str) -> Option<String> {
    match value.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Terminal status of one analysis pass. Only `Completed` appears in
/// returned results; a failed pass surfaces as an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Completed,
    Failed,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Complete outcome of one document analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unique identifier for this analysis pass.
    pub id: String,
    /// The six extracted fields, flattened to top-level keys.
    #[serde(flatten)]
    pub fields: PolicyFields,
    /// Advisory notes derived from the extracted fields.
    pub compliance_notes: Vec<String>,
    /// Terminal status of the pass.
    pub processing_status: ProcessingStatus,
    /// When the analysis finished.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Assemble a completed result for one analysis pass.
    pub fn completed(fields: PolicyFields, compliance_notes: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
            compliance_notes,
            processing_status: ProcessingStatus::Completed,
            timestamp: Utc::now(),
        }
    }
}
