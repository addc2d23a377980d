//! Encounter records and the raw-input parse boundary.

use thiserror::Error;

/// One queued unit of work: a patient encounter awaiting triage.
///
/// Holds only the raw attributes consumed by scoring. The derived
/// `score` and `priority` never live here; they exist only on the
/// per-request annotated view.
///
/// The `id` is assigned by the creator and assumed unique within the
/// current queue; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    /// Creator-assigned identifier, e.g. `"E001"`.
    pub id: String,
    /// Patient age in years.
    pub age: u32,
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: u32,
    /// Free-text chief complaint, matched case-sensitively against the
    /// high-risk set.
    pub chief_complaint: String,
    /// Minutes since arrival.
    pub wait_minutes: u32,
}

impl Encounter {
    /// Convenience constructor.
    pub fn new(
        id: impl Into<String>,
        age: u32,
        heart_rate: u32,
        systolic_bp: u32,
        chief_complaint: impl Into<String>,
        wait_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            age,
            heart_rate,
            systolic_bp,
            chief_complaint: chief_complaint.into(),
            wait_minutes,
        }
    }
}

/// Rejected raw input at the parse boundary.
///
/// Raised before an [`Encounter`] is constructed; the scoring core
/// never sees partially-typed records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The identifier field was missing or blank.
    #[error("encounter id is required")]
    MissingId,
    /// A numeric attribute could not be parsed as a non-negative integer.
    #[error("malformed {field}: {value:?} is not a non-negative integer")]
    MalformedAttribute {
        field: &'static str,
        value: String,
    },
}

/// Raw, untyped encounter fields as they arrive from a form.
///
/// [`parse`](EncounterDraft::parse) is the only path from raw strings
/// to an [`Encounter`].
///
/// ```
/// use triage_queue::queue::EncounterDraft;
///
/// let draft = EncounterDraft {
///     id: "E007".into(),
///     age: "61".into(),
///     heart_rate: "99".into(),
///     systolic_bp: "104".into(),
///     chief_complaint: "dizziness".into(),
///     wait_minutes: "7".into(),
/// };
/// let encounter = draft.parse().unwrap();
/// assert_eq!(encounter.age, 61);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterDraft {
    pub id: String,
    pub age: String,
    pub heart_rate: String,
    pub systolic_bp: String,
    pub chief_complaint: String,
    pub wait_minutes: String,
}

impl EncounterDraft {
    /// Coerces the raw fields into a typed [`Encounter`].
    ///
    /// Numeric fields must parse as non-negative integers; the id must
    /// be non-blank. The chief complaint is carried through verbatim.
    pub fn parse(&self) -> Result<Encounter, ParseError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ParseError::MissingId);
        }
        Ok(Encounter {
            id: id.to_string(),
            age: parse_field("age", &self.age)?,
            heart_rate: parse_field("heart_rate", &self.heart_rate)?,
            systolic_bp: parse_field("systolic_bp", &self.systolic_bp)?,
            chief_complaint: self.chief_complaint.clone(),
            wait_minutes: parse_field("wait_minutes", &self.wait_minutes)?,
        })
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<u32, ParseError> {
    raw.trim()
        .parse()
        .map_err(|_| ParseError::MalformedAttribute {
            field,
            value: raw.to_string(),
        })
}
