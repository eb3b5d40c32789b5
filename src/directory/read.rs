// src/directory/read.rs
use csv::{ByteRecord, ReaderBuilder};
use encoding_rs::mem::decode_latin1;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use crate::config::DELIMITER;
use crate::directory::row::Row;
use crate::error::DirectoryError;

/// Open the semicolon-delimited export at `path` and decode every record as
/// Latin-1. The file handle lives only as long as the reader inside
/// `parse_rows`, so it is closed on success and on a mid-file error alike.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>, DirectoryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DirectoryError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(file, path)
}

/// Parse rows from any byte source; `origin` only labels errors.
pub fn parse_rows<R: Read>(reader: R, origin: &Path) -> Result<Vec<Row>, DirectoryError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // rows are ragged; padding happens in Row::new
        .delimiter(DELIMITER)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    loop {
        let more = rdr
            .read_byte_record(&mut record)
            .map_err(|source| DirectoryError::Decode {
                path: origin.to_path_buf(),
                source,
            })?;
        if !more {
            break;
        }
        rows.push(Row::new(record.iter().map(decode_latin1)));
    }

    debug!(rows = rows.len(), "read input records");
    Ok(rows)
}
