use crate::config::{DECORATIVE_PREFIX, HEADER_TOKEN, ROW_WIDTH};
use crate::directory::model::Contact;
use crate::directory::text::{is_upper, normalize, title_case};

/// One input record, cells trimmed and padded with blanks to at least
/// `ROW_WIDTH`. Extra cells are kept for classification only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

/// What a row means for the directory being built, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    Decorative,
    Header,
    /// Starts a new section; carries the title-cased name.
    SectionMarker(String),
    Data,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<String> = cells
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .collect();
        if cells.len() < ROW_WIDTH {
            cells.resize(ROW_WIDTH, String::new());
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    fn first(&self) -> &str {
        &self.cells[0]
    }

    pub fn classify(&self) -> RowKind {
        if self.cells.iter().all(|c| c.is_empty()) {
            return RowKind::Blank;
        }
        if self.first().starts_with(DECORATIVE_PREFIX) {
            return RowKind::Decorative;
        }
        if self.cells.iter().any(|c| c == HEADER_TOKEN) {
            return RowKind::Header;
        }
        if self.is_section_marker() {
            return RowKind::SectionMarker(title_case(self.first()));
        }
        RowKind::Data
    }

    // exactly one non-blank cell, it is the first one, and it has no lower-case letters
    fn is_section_marker(&self) -> bool {
        let non_empty = self.cells.iter().filter(|c| !c.is_empty()).count();
        non_empty == 1 && !self.first().is_empty() && is_upper(self.first())
    }

    /// Positional destructure of a data row:
    /// `[ignored, name, extension, cubicle, position, email]`.
    /// `None` when the name cell is blank.
    pub fn to_contact(&self) -> Option<Contact> {
        let [_, name, extension, cubicle, position, email] = &self.cells[..ROW_WIDTH] else {
            return None;
        };
        if name.is_empty() {
            return None;
        }
        Some(Contact {
            name: name.clone(),
            position: normalize(position),
            extension: normalize(extension),
            cubicle: normalize(cubicle),
            email: normalize(email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_rows() {
        let row = Row::new(["", "Ana"]);
        assert_eq!(row.cells().len(), ROW_WIDTH);
        assert_eq!(row.cells()[1], "Ana");
        assert_eq!(row.cells()[5], "");
    }

    #[test]
    fn test_keeps_extra_cells() {
        let row = Row::new(["1", "Ana", "101", "A1", "Aux", "a@x.com", "extra"]);
        assert_eq!(row.cells().len(), 7);
        let contact = row.to_contact().unwrap();
        assert_eq!(contact.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_blank_row() {
        assert_eq!(Row::new(["", " ", "\t", "", "", ""]).classify(), RowKind::Blank);
        assert_eq!(Row::new(Vec::<String>::new()).classify(), RowKind::Blank);
    }

    #[test]
    fn test_decorative_row() {
        assert_eq!(Row::new(["Mayo 2025"]).classify(), RowKind::Decorative);
        assert_eq!(Row::new(["  Mayo", "x"]).classify(), RowKind::Decorative);
        // other months are not filtered
        assert_eq!(Row::new(["Junio 2025"]).classify(), RowKind::Data);
        // "MAYO" is a section, the prefix check is case-sensitive
        assert_eq!(Row::new(["MAYO"]).classify(), RowKind::SectionMarker("Mayo".into()));
    }

    #[test]
    fn test_header_row() {
        let row = Row::new(["", "NOMBRE", "EXT", "CUB", "PUESTO", "EMAIL"]);
        assert_eq!(row.classify(), RowKind::Header);
        assert_eq!(Row::new(["", " NOMBRE "]).classify(), RowKind::Header);
        assert_eq!(Row::new(["", "", "", "", "", "", "NOMBRE"]).classify(), RowKind::Header);
        // exact match only
        assert_eq!(Row::new(["", "NOMBRES"]).classify(), RowKind::Data);
    }

    #[test]
    fn test_section_marker() {
        assert_eq!(
            Row::new(["SALA DE ESPERA", "", "", "", "", ""]).classify(),
            RowKind::SectionMarker("Sala De Espera".into())
        );
        assert_eq!(
            Row::new(["  DIRECCIÓN "]).classify(),
            RowKind::SectionMarker("Dirección".into())
        );
        // no letters still counts as upper-case
        assert_eq!(Row::new(["2"]).classify(), RowKind::SectionMarker("2".into()));
    }

    #[test]
    fn test_not_section_marker() {
        // lone cell not in first position
        assert_eq!(Row::new(["", "RECEPCIÓN"]).classify(), RowKind::Data);
        // mixed case
        assert_eq!(Row::new(["Recepción"]).classify(), RowKind::Data);
        // more than one non-blank cell
        assert_eq!(Row::new(["RECEPCIÓN", "X"]).classify(), RowKind::Data);
        // extra cell beyond the sixth counts
        assert_eq!(
            Row::new(["RECEPCIÓN", "", "", "", "", "", "X"]).classify(),
            RowKind::Data
        );
    }

    #[test]
    fn test_to_contact() {
        let row = Row::new(["1", " Ana López ", "101", "A1", "Auxiliar", "ana@x.com"]);
        assert_eq!(
            row.to_contact(),
            Some(Contact {
                name: "Ana López".into(),
                position: Some("Auxiliar".into()),
                extension: Some("101".into()),
                cubicle: Some("A1".into()),
                email: Some("ana@x.com".into()),
            })
        );
    }

    #[test]
    fn test_to_contact_nulls_blank_fields() {
        let contact = Row::new(["", "Luis", " ", "", "", "  "]).to_contact().unwrap();
        assert_eq!(contact.name, "Luis");
        assert_eq!(contact.position, None);
        assert_eq!(contact.extension, None);
        assert_eq!(contact.cubicle, None);
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_to_contact_requires_name() {
        let row = Row::new(["1", "  ", "101", "A1", "Auxiliar", "ana@x.com"]);
        assert_eq!(row.to_contact(), None);
    }
}
