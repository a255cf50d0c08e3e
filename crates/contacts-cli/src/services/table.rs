// crates/contacts-cli/src/services/table.rs - Plain-text table rendering
//
// Renders contacts as left-aligned columns under a header row. Widths are
// measured with `console` so wide characters line up; the header is bolded
// only when the terminal supports styling.

use console::{Alignment, pad_str, style};
use contacts_core::contact::{Contact, Field};

const NUMBER_HEADER: &str = "number";
const COLUMN_GAP: &str = "  ";

/// Formats contact rows for display
pub struct TableRenderer {
    styled: bool,
}

impl TableRenderer {
    /// Renderer that styles the header when stdout is a color terminal
    pub fn for_terminal() -> Self {
        Self {
            styled: console::colors_enabled(),
        }
    }

    /// Renderer that never emits escape codes
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { styled: false }
    }

    /// Render a header plus one line per contact, without a trailing newline
    pub fn render<'a>(&self, contacts: impl IntoIterator<Item = &'a Contact>) -> String {
        let mut header: Vec<String> = vec![NUMBER_HEADER.to_string()];
        header.extend(Field::ALL.iter().map(|field| field.name().to_string()));

        let rows: Vec<Vec<String>> = contacts
            .into_iter()
            .map(|contact| {
                let mut cells = vec![contact.number.to_string()];
                cells.extend(Field::ALL.iter().map(|field| contact.get(*field).to_string()));
                cells
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|column| {
                std::iter::once(&header[column])
                    .chain(rows.iter().map(|row| &row[column]))
                    .map(|cell| console::measure_text_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(self.format_line(&header, &widths, self.styled));
        for row in &rows {
            lines.push(self.format_line(row, &widths, false));
        }
        lines.join("\n")
    }

    fn format_line(&self, cells: &[String], widths: &[usize], bold: bool) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let text = pad_str(cell, *width, Alignment::Left, None).into_owned();
                if bold {
                    style(text).bold().to_string()
                } else {
                    text
                }
            })
            .collect();
        padded.join(COLUMN_GAP).trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(number: u32, last: &str, first: &str, org: &str) -> Contact {
        let mut contact = Contact::new(number);
        contact.set(Field::LastName, last);
        contact.set(Field::FirstName, first);
        contact.set(Field::MiddleName, "");
        contact.set(Field::Organization, org);
        contact.set(Field::WorkPhone, "None");
        contact.set(Field::PersonalPhone, "None");
        contact
    }

    #[test]
    fn test_header_only_for_no_rows() {
        let rendered = TableRenderer::plain().render(&Vec::<Contact>::new());
        assert_eq!(
            rendered,
            "number  last_name  first_name  middle_name  organization  work_phone  personal_phone"
        );
    }

    #[test]
    fn test_columns_are_aligned() {
        let rows = [
            contact(1, "Doe", "John", "Acme"),
            contact(12, "Featherstonehaugh", "Jo", "Initech"),
        ];
        let rendered = TableRenderer::plain().render(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        let column = lines[0].find("first_name").unwrap();
        assert_eq!(lines[1].find("John"), Some(column));
        assert_eq!(lines[2].find("Jo"), Some(column));
        assert!(lines[1].starts_with("1       Doe"));
    }
}
