use serde::{Deserialize, Serialize};

/// One person in the directory. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub position: Option<String>,
    pub extension: Option<String>,
    pub cubicle: Option<String>,
    pub email: Option<String>,
}

/// A named organizational unit, contacts kept in input row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub contacts: Vec<Contact>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: Vec::new(),
        }
    }
}

/// The published snapshot. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub updated_at: String,
    pub organization: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn contact_count(&self) -> usize {
        self.sections.iter().map(|s| s.contacts.len()).sum()
    }
}
