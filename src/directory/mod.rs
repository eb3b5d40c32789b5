// src/directory/mod.rs
pub mod builder;
pub mod model;
pub mod read;
pub mod row;
pub mod text;
pub mod write;

use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::error::DirectoryError;
use builder::DirectoryBuilder;
use model::Document;

pub use read::read_rows;
pub use write::write_document;

/// Read the export, rebuild the section tree and replace the JSON snapshot.
///
/// The output file is only touched once every input row has been read and
/// the document is complete, so an input failure leaves it as it was.
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input.display(), output = %config.output.display()))]
pub fn convert(config: &ConvertConfig) -> Result<Document, DirectoryError> {
    let rows = read_rows(&config.input)?;

    let mut builder = DirectoryBuilder::default();
    builder.extend(&rows);
    let doc = builder.finish(config.updated_at.as_str(), config.organization.as_str());
    debug!(
        rows = rows.len(),
        sections = doc.sections.len(),
        contacts = doc.contact_count(),
        "built directory"
    );

    write_document(&doc, &config.output)?;
    info!("wrote {}", config.output.display());
    Ok(doc)
}
