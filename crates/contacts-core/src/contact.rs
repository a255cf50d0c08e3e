// crates/contacts-core/src/contact.rs - Contact record and field catalogue
//
// A contact is one row of the contact table. Every field except `number` is
// free text as far as storage is concerned; only the two phone fields carry a
// format rule, and that rule is enforced when values are collected, never when
// rows are read back from disk.
//
// FIELD CATALOGUE:
// - String attributes: last_name, first_name, middle_name, organization
// - Digit attributes:  work_phone, personal_phone
// - `number` is the row key and is not searchable
//
// The snake_case field names double as prompt labels, CSV header cells and
// search attribute tokens, so they live in exactly one place: `Field::name`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors that can occur while working with contact fields
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Invalid phone format: {0:?} (expected 'None' or 11-15 digits)")]
    InvalidPhoneFormat(String),

    #[error("This attribute doesn't exist: {0}")]
    UnknownField(String),
}

/// Result type for contact operations
pub type ContactResult<T> = Result<T, ContactError>;

/// Literal stored in a phone field when the contact has no such number
pub const NO_PHONE: &str = "None";

static PHONE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11,15}$").expect("phone pattern is a valid regex"));

/// Check a phone value against the storage rule
///
/// Accepted values are the literal `None` or 11 to 15 ASCII digits with no
/// separators, no leading `+` and no surrounding whitespace.
pub fn is_valid_phone(value: &str) -> bool {
    value == NO_PHONE || PHONE_DIGITS.is_match(value)
}

/// Validate a phone value, returning the offending input on failure
pub fn validate_phone(value: &str) -> ContactResult<()> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(ContactError::InvalidPhoneFormat(value.to_string()))
    }
}

/// A user-editable contact attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    LastName,
    FirstName,
    MiddleName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    /// Free-text attributes, in collection order
    pub const STRING: [Field; 4] = [
        Field::LastName,
        Field::FirstName,
        Field::MiddleName,
        Field::Organization,
    ];

    /// Phone attributes, in collection order
    pub const DIGIT: [Field; 2] = [Field::WorkPhone, Field::PersonalPhone];

    /// Every attribute, in collection order (string attributes first)
    pub const ALL: [Field; 6] = [
        Field::LastName,
        Field::FirstName,
        Field::MiddleName,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Canonical snake_case name used in prompts, headers and searches
    pub fn name(self) -> &'static str {
        match self {
            Field::LastName => "last_name",
            Field::FirstName => "first_name",
            Field::MiddleName => "middle_name",
            Field::Organization => "organization",
            Field::WorkPhone => "work_phone",
            Field::PersonalPhone => "personal_phone",
        }
    }

    /// Whether values of this field must satisfy the phone rule
    pub fn is_phone(self) -> bool {
        matches!(self, Field::WorkPhone | Field::PersonalPhone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ContactError;

    fn from_str(s: &str) -> ContactResult<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

/// One row of the contact table
///
/// Field declaration order is the canonical column order of the backing file.
/// The CSV store relies on it for both header generation and positional reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub number: u32,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl Contact {
    /// Create a contact with the given number and every other field blank
    pub fn new(number: u32) -> Self {
        Self {
            number,
            last_name: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            organization: String::new(),
            work_phone: String::new(),
            personal_phone: String::new(),
        }
    }

    /// Read an attribute by field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    /// Overwrite an attribute by field
    ///
    /// No validation happens here; callers collecting phone values from users
    /// check them with [`validate_phone`] first.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::LastName => &mut self.last_name,
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::Organization => &mut self.organization,
            Field::WorkPhone => &mut self.work_phone,
            Field::PersonalPhone => &mut self.personal_phone,
        };
        *slot = value.into();
    }

    /// Whether this contact carries exactly the given full name
    pub fn has_name(&self, key: &NameKey) -> bool {
        self.last_name == key.last_name
            && self.first_name == key.first_name
            && self.middle_name == key.middle_name
    }
}

/// Full-name lookup key used to pick a contact for redaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameKey {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

impl NameKey {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("None"));
        assert!(is_valid_phone("12345678901"));
        assert!(is_valid_phone("123456789012345"));

        assert!(!is_valid_phone("1234567890")); // 10 digits
        assert!(!is_valid_phone("1234567890123456")); // 16 digits
        assert!(!is_valid_phone("+12345678901"));
        assert!(!is_valid_phone("1234-5678901"));
        assert!(!is_valid_phone(" 12345678901"));
        assert!(!is_valid_phone("none"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠١")); // non-ASCII digits
    }

    #[test]
    fn test_validate_phone_reports_input() {
        assert_eq!(validate_phone("None"), Ok(()));
        assert_eq!(
            validate_phone("555"),
            Err(ContactError::InvalidPhoneFormat("555".to_string()))
        );
    }

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("number".parse::<Field>().is_err());
        assert!("Last_Name".parse::<Field>().is_err());
        assert!("".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_groups() {
        assert!(Field::STRING.iter().all(|f| !f.is_phone()));
        assert!(Field::DIGIT.iter().all(|f| f.is_phone()));
        assert_eq!(Field::STRING.len() + Field::DIGIT.len(), Field::ALL.len());
    }

    #[test]
    fn test_get_and_set() {
        let mut contact = Contact::new(7);
        contact.set(Field::Organization, "Acme");
        contact.set(Field::WorkPhone, "12345678901");

        assert_eq!(contact.get(Field::Organization), "Acme");
        assert_eq!(contact.get(Field::WorkPhone), "12345678901");
        assert_eq!(contact.get(Field::LastName), "");
        assert_eq!(contact.number, 7);
    }

    #[test]
    fn test_has_name_requires_all_three_parts() {
        let mut contact = Contact::new(1);
        contact.set(Field::LastName, "Doe");
        contact.set(Field::FirstName, "John");
        contact.set(Field::MiddleName, "M");

        assert!(contact.has_name(&NameKey::new("Doe", "John", "M")));
        assert!(!contact.has_name(&NameKey::new("Doe", "John", "")));
        assert!(!contact.has_name(&NameKey::new("John", "Doe", "M")));
    }

    proptest! {
        #[test]
        fn accepted_phones_are_none_or_digit_runs(value in "\\PC{0,20}") {
            if is_valid_phone(&value) {
                prop_assert!(
                    value == NO_PHONE
                        || ((11..=15).contains(&value.len())
                            && value.bytes().all(|b| b.is_ascii_digit()))
                );
            }
        }

        #[test]
        fn digit_runs_of_valid_length_are_accepted(value in "[0-9]{11,15}") {
            prop_assert!(is_valid_phone(&value));
        }
    }
}
