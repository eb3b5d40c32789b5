use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::model::Document;
use crate::error::DirectoryError;

/// Serialize `doc` as 2-space indented JSON (UTF-8, non-ASCII written
/// literally, absent fields as `null`) and replace `path` with it.
///
/// The bytes go to a hidden sibling `.<name>.tmp` first and are renamed over
/// `path`, so readers never see a half-written snapshot.
pub fn write_document<P: AsRef<Path>>(doc: &Document, path: P) -> Result<(), DirectoryError> {
    let path = path.as_ref();
    let bytes = to_json_bytes(doc)?;

    let tmp_path = tmp_sibling(path);
    write_and_rename(&bytes, &tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        DirectoryError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_and_rename(bytes: &[u8], tmp_path: &Path, path: &Path) -> std::io::Result<()> {
    {
        let file = fs::File::create(tmp_path)?;
        let mut out = BufWriter::new(file);
        out.write_all(bytes)?;
        out.flush()?;
    }
    fs::rename(tmp_path, path)
}

/// The exact bytes `write_document` puts on disk.
pub fn to_json_bytes(doc: &Document) -> Result<Vec<u8>, DirectoryError> {
    Ok(serde_json::to_vec_pretty(doc)?)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "directorio.json".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
