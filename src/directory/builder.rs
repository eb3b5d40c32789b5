use tracing::trace;

use crate::directory::model::{Document, Section};
use crate::directory::row::{Row, RowKind};

/// Accumulates sections in a single forward pass over the rows. The active
/// section is always the last one pushed.
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    sections: Vec<Section>,
}

impl DirectoryBuilder {
    pub fn push(&mut self, row: &Row) {
        match row.classify() {
            RowKind::Blank | RowKind::Decorative | RowKind::Header => {
                trace!(cells = ?row.cells(), "skipping non-data row");
            }
            RowKind::SectionMarker(name) => {
                trace!(section = %name, "new section");
                self.sections.push(Section::new(name));
            }
            RowKind::Data => {
                let Some(section) = self.sections.last_mut() else {
                    trace!(cells = ?row.cells(), "data row before any section, skipping");
                    return;
                };
                match row.to_contact() {
                    Some(contact) => section.contacts.push(contact),
                    None => trace!(cells = ?row.cells(), "data row without a name, skipping"),
                }
            }
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn finish(self, updated_at: impl Into<String>, organization: impl Into<String>) -> Document {
        Document {
            updated_at: updated_at.into(),
            organization: organization.into(),
            sections: self.sections,
        }
    }
}

impl<'a> Extend<&'a Row> for DirectoryBuilder {
    fn extend<T: IntoIterator<Item = &'a Row>>(&mut self, rows: T) {
        for row in rows {
            self.push(row);
        }
    }
}
