// crates/contacts-cli/src/services/form.rs - Contact data entry
//
// Shared by `add` and `redact`: both need a complete set of field values for
// a given contact number. Free-text fields are taken as typed; phone fields go
// through the prompter's retry loop until they satisfy the phone rule.

use std::io::{BufRead, Write};

use contacts_core::contact::{is_valid_phone, Contact, Field};

use crate::prompt::{PromptResult, Prompter};

/// Collects a full contact record field by field
pub struct ContactForm;

impl ContactForm {
    /// Prompt for every field in collection order and build a contact
    ///
    /// The supplied `number` is kept as is; it is never asked for.
    pub fn collect<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        number: u32,
    ) -> PromptResult<Contact> {
        let mut contact = Contact::new(number);

        for field in Field::STRING {
            let value = prompter.ask(&format!("Enter contact {field}: "))?;
            contact.set(field, value);
        }

        for field in Field::DIGIT {
            let value = prompter.ask_until(
                field.name(),
                &format!("Enter contact {field}: "),
                &format!(
                    "Enter contact {field} without '+' and other symbols, \
                     only numbers (11-15 symbols) or 'None': "
                ),
                is_valid_phone,
            )?;
            contact.set(field, value);
        }

        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptError;
    use crate::prompt::testing::{scripted, transcript};

    #[test]
    fn test_collects_fields_in_order() {
        let mut prompter = scripted("Doe\nJohn\nM\nAcme\n12345678901\nNone\n", 0);
        let contact = ContactForm::collect(&mut prompter, 4).unwrap();

        assert_eq!(contact.number, 4);
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.first_name, "John");
        assert_eq!(contact.middle_name, "M");
        assert_eq!(contact.organization, "Acme");
        assert_eq!(contact.work_phone, "12345678901");
        assert_eq!(contact.personal_phone, "None");

        let out = transcript(prompter);
        let last = out.find("last_name").unwrap();
        let first = out.find("first_name").unwrap();
        let personal = out.find("personal_phone").unwrap();
        assert!(last < first && first < personal);
    }

    #[test]
    fn test_invalid_phone_is_reprompted() {
        let mut prompter = scripted("Doe\nJohn\n\n\n+1 555 0100\n123\n12345678901\nNone\n", 0);
        let contact = ContactForm::collect(&mut prompter, 1).unwrap();

        assert_eq!(contact.work_phone, "12345678901");
        let out = transcript(prompter);
        assert_eq!(out.matches("without '+' and other symbols").count(), 2);
    }

    #[test]
    fn test_phone_retries_are_bounded() {
        let mut prompter = scripted("a\nb\nc\nd\nx\ny\nz\n", 3);
        let result = ContactForm::collect(&mut prompter, 1);

        assert!(matches!(
            result,
            Err(PromptError::TooManyAttempts { ref field, attempts: 3 }) if field == "work_phone"
        ));
    }

    #[test]
    fn test_truncated_input_cancels() {
        let mut prompter = scripted("Doe\nJohn\n", 0);
        assert!(matches!(
            ContactForm::collect(&mut prompter, 1),
            Err(PromptError::InputClosed)
        ));
    }
}
