//! Contact record model.
//!
//! # Responsibility
//! - Define the polymorphic `Record` entity with its `Person` and
//!   `Organization` variants.
//! - Enforce field-level validation through the string-keyed
//!   `set_field`/`field_value` protocol drivers depend on.
//!
//! # Invariants
//! - `RecordMeta::number` is always empty or currently valid; a rejected
//!   value is cleared, never stored.
//! - `created_at` is set once at construction and never changes.
//! - `last_edited_at` is bumped on every field mutation, including rejected
//!   validation paths. Unknown field names do not bump it.

use crate::model::phone::is_valid_number;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder shown for unset person fields.
pub const NO_DATA: &str = "[no data]";
/// Placeholder shown for an empty phone number.
pub const NO_NUMBER: &str = "[no number]";

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Validation failure reported by a field setter.
///
/// The field is reset to its cleared state when one of these is reported;
/// the caller decides how to surface the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    BadNumber,
    BadBirthDate,
    BadGender,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadNumber => write!(f, "Wrong number format!"),
            Self::BadBirthDate => write!(f, "Bad birth date!"),
            Self::BadGender => write!(f, "Bad gender!"),
        }
    }
}

impl Error for FieldError {}

/// Result of a `set_field` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetFieldOutcome {
    /// Value stored as given (possibly the legal empty/cleared state).
    Updated,
    /// Value rejected by validation; the field was reset to its cleared
    /// state and the edit timestamp was still bumped.
    Rejected(FieldError),
    /// Field name not recognized by this record variant; nothing changed.
    Ignored,
}

/// Person gender, restricted to the two accepted markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }
}

/// Bookkeeping shared by every record variant: the validated phone number
/// and the creation/edit timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    number: String,
    created_at: DateTime<Utc>,
    last_edited_at: DateTime<Utc>,
}

impl RecordMeta {
    /// Creates fresh bookkeeping and runs the initial number through
    /// validation, reporting the failure when the input is rejected.
    fn new(number: &str) -> (Self, Option<FieldError>) {
        let now = Utc::now();
        let mut meta = Self {
            number: String::new(),
            created_at: now,
            last_edited_at: now,
        };
        let issue = meta.set_number(number);
        (meta, issue)
    }

    fn touch(&mut self) {
        self.last_edited_at = Utc::now();
    }

    /// Stores a phone number, clearing it on empty or invalid input.
    ///
    /// Empty input is the legal cleared state and reports nothing; invalid
    /// input reports [`FieldError::BadNumber`] and clears the field rather
    /// than keeping the previous value. The edit timestamp is bumped on
    /// every call.
    fn set_number(&mut self, value: &str) -> Option<FieldError> {
        let issue = if value.is_empty() {
            self.number.clear();
            None
        } else if is_valid_number(value) {
            self.number = value.to_string();
            None
        } else {
            self.number.clear();
            Some(FieldError::BadNumber)
        };
        self.touch();
        issue
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Number as shown to the user, substituting the sentinel when unset.
    pub fn number_printable(&self) -> &str {
        if self.number.is_empty() {
            NO_NUMBER
        } else {
            &self.number
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_edited_at(&self) -> DateTime<Utc> {
        self.last_edited_at
    }

    fn created_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    fn edited_display(&self) -> String {
        self.last_edited_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Parses a birth date in strict `YYYY-MM-DD` form.
///
/// `NaiveDate::parse_from_str` alone accepts unpadded months and days like
/// `1999-1-1`; requiring the canonical rendering to match the input keeps
/// only fully padded ISO dates.
fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).ok()?;
    if date.format(BIRTH_DATE_FORMAT).to_string() == value {
        Some(date)
    } else {
        None
    }
}

/// A person contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    surname: String,
    birth_date: Option<String>,
    gender: Option<Gender>,
    #[serde(flatten)]
    meta: RecordMeta,
}

impl Person {
    /// Builds a person fully formed from user-supplied field values.
    ///
    /// Every value is routed through its setter, so invalid number, birth
    /// date or gender input ends up cleared; the reported failures are
    /// returned alongside the record for the caller to surface.
    pub fn new(
        name: &str,
        surname: &str,
        birth_date: &str,
        gender: &str,
        number: &str,
    ) -> (Self, Vec<FieldError>) {
        let (meta, number_issue) = RecordMeta::new(number);
        let mut person = Self {
            name: String::new(),
            surname: String::new(),
            birth_date: None,
            gender: None,
            meta,
        };
        let mut issues = Vec::new();
        if let Some(issue) = number_issue {
            issues.push(issue);
        }
        person.set_name(name);
        person.set_surname(surname);
        if let Some(issue) = person.set_birth_date(birth_date) {
            issues.push(issue);
        }
        if let Some(issue) = person.set_gender(gender) {
            issues.push(issue);
        }
        (person, issues)
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
        self.meta.touch();
    }

    pub fn set_surname(&mut self, value: &str) {
        self.surname = value.to_string();
        self.meta.touch();
    }

    /// Stores a `YYYY-MM-DD` birth date, verbatim after trimming.
    ///
    /// Empty or unparseable input clears the field back to "no data" and
    /// reports [`FieldError::BadBirthDate`]. The edit timestamp is bumped
    /// on every call.
    pub fn set_birth_date(&mut self, value: &str) -> Option<FieldError> {
        let trimmed = value.trim();
        let issue = if parse_birth_date(trimmed).is_some() {
            self.birth_date = Some(trimmed.to_string());
            None
        } else {
            self.birth_date = None;
            Some(FieldError::BadBirthDate)
        };
        self.meta.touch();
        issue
    }

    /// Stores a gender marker, case-normalized; only `M` and `F` pass.
    pub fn set_gender(&mut self, value: &str) -> Option<FieldError> {
        let issue = match value.trim().to_uppercase().as_str() {
            "M" => {
                self.gender = Some(Gender::M);
                None
            }
            "F" => {
                self.gender = Some(Gender::F);
                None
            }
            _ => {
                self.gender = None;
                Some(FieldError::BadGender)
            }
        };
        self.meta.touch();
        issue
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Birth date as shown to the user.
    pub fn birth_date_printable(&self) -> &str {
        self.birth_date.as_deref().unwrap_or(NO_DATA)
    }

    /// Gender as shown to the user.
    pub fn gender_printable(&self) -> &str {
        self.gender.map_or(NO_DATA, Gender::as_str)
    }

    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}

/// An organization contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    name: String,
    address: String,
    #[serde(flatten)]
    meta: RecordMeta,
}

impl Organization {
    /// Builds an organization fully formed from user-supplied field values.
    pub fn new(name: &str, address: &str, number: &str) -> (Self, Vec<FieldError>) {
        let (meta, number_issue) = RecordMeta::new(number);
        let mut org = Self {
            name: String::new(),
            address: String::new(),
            meta,
        };
        org.set_name(name);
        org.set_address(address);
        (org, number_issue.into_iter().collect())
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
        self.meta.touch();
    }

    pub fn set_address(&mut self, value: &str) {
        self.address = value.to_string();
        self.meta.touch();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}

/// One contact entry, person or organization.
///
/// Serialized with a `type` tag so snapshots stay self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Person(Person),
    Organization(Organization),
}

impl Record {
    /// Name shown in list and search results.
    pub fn list_name(&self) -> String {
        match self {
            Self::Person(p) => format!("{} {}", p.name, p.surname),
            Self::Organization(o) => o.name.clone(),
        }
    }

    /// Field names this variant accepts for editing, in prompt order.
    pub fn editable_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Person(_) => &["name", "surname", "birth", "gender", "number"],
            Self::Organization(_) => &["name", "address", "number"],
        }
    }

    /// Displayed value of one field, with sentinel substitution.
    ///
    /// Unrecognized names yield the empty string.
    pub fn field_value(&self, field: &str) -> String {
        match self {
            Self::Person(p) => match field {
                "name" => p.name.clone(),
                "surname" => p.surname.clone(),
                "birth" => p.birth_date_printable().to_string(),
                "gender" => p.gender_printable().to_string(),
                "number" => p.meta.number_printable().to_string(),
                _ => String::new(),
            },
            Self::Organization(o) => match field {
                "name" => o.name.clone(),
                "address" => o.address.clone(),
                "number" => o.meta.number_printable().to_string(),
                _ => String::new(),
            },
        }
    }

    /// Routes a value to the named field's setter.
    ///
    /// Unknown names are a silent no-op (`Ignored`), distinct from a known
    /// field rejecting its value (`Rejected`).
    pub fn set_field(&mut self, field: &str, value: &str) -> SetFieldOutcome {
        let issue = match self {
            Self::Person(p) => match field {
                "name" => {
                    p.set_name(value);
                    None
                }
                "surname" => {
                    p.set_surname(value);
                    None
                }
                "birth" => p.set_birth_date(value),
                "gender" => p.set_gender(value),
                "number" => p.meta.set_number(value),
                _ => return SetFieldOutcome::Ignored,
            },
            Self::Organization(o) => match field {
                "name" => {
                    o.set_name(value);
                    None
                }
                "address" => {
                    o.set_address(value);
                    None
                }
                "number" => o.meta.set_number(value),
                _ => return SetFieldOutcome::Ignored,
            },
        };
        match issue {
            Some(err) => SetFieldOutcome::Rejected(err),
            None => SetFieldOutcome::Updated,
        }
    }

    /// Lowercased concatenation of displayed field values, used for
    /// matching only and never shown to the user.
    pub fn search_text(&self) -> String {
        let values: Vec<String> = self
            .editable_fields()
            .iter()
            .map(|field| self.field_value(field))
            .collect();
        values.join(" ").to_lowercase()
    }

    /// Ordered label/value pairs for the full record dump.
    pub fn info_lines(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Person(p) => vec![
                ("Name", p.name.clone()),
                ("Surname", p.surname.clone()),
                ("Birth date", p.birth_date_printable().to_string()),
                ("Gender", p.gender_printable().to_string()),
                ("Number", p.meta.number_printable().to_string()),
                ("Time created", p.meta.created_display()),
                ("Time last edit", p.meta.edited_display()),
            ],
            Self::Organization(o) => vec![
                ("Organization name", o.name.clone()),
                ("Address", o.address.clone()),
                ("Number", o.meta.number_printable().to_string()),
                ("Time created", o.meta.created_display()),
                ("Time last edit", o.meta.edited_display()),
            ],
        }
    }

    /// Shared bookkeeping of either variant.
    pub fn meta(&self) -> &RecordMeta {
        match self {
            Self::Person(p) => &p.meta,
            Self::Organization(o) => &o.meta,
        }
    }
}
