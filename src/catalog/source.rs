use std::path::PathBuf;

use tracing::debug;

use crate::foundation::error::{TitleGridError, TitleGridResult};

/// Longest identifier a title list may contain, in bytes.
pub const MAX_TITLE_ID_LEN: usize = 7;

/// Opaque image reference resolved by the renderer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ImageHandle(pub u32);

/// One selectable title as delivered by a catalog source.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    /// Title identifier handed to the loader on confirm.
    pub id: String,
    /// Box-art image for the title.
    pub image: ImageHandle,
}

/// External provider of the ordered title catalog.
pub trait CatalogSource {
    /// Read the catalog. A missing source yields an empty list, not an error.
    fn load(&mut self) -> TitleGridResult<Vec<CatalogEntry>>;
}

/// Parse a title list: identifiers separated by commas, whitespace or NUL bytes.
///
/// Image handles are assigned by position.
pub fn parse_title_list(text: &str) -> TitleGridResult<Vec<CatalogEntry>> {
    let mut out = Vec::new();
    for token in text.split(|c: char| c == ',' || c == '\0' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        if token.len() > MAX_TITLE_ID_LEN {
            return Err(TitleGridError::catalog(format!(
                "title id '{token}' is longer than {MAX_TITLE_ID_LEN} bytes"
            )));
        }
        let image = u32::try_from(out.len())
            .map(ImageHandle)
            .map_err(|_| TitleGridError::catalog("title list is too long"))?;
        out.push(CatalogEntry {
            id: token.to_owned(),
            image,
        });
    }
    Ok(out)
}

/// Title list stored in a text file.
#[derive(Clone, Debug)]
pub struct TitleListFile {
    path: PathBuf,
}

impl TitleListFile {
    /// Source reading `path` on every load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for TitleListFile {
    fn load(&mut self) -> TitleGridResult<Vec<CatalogEntry>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "title list missing, catalog is empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(TitleGridError::catalog(format!(
                    "read title list '{}': {e}",
                    self.path.display()
                )));
            }
        };
        parse_title_list(&text)
    }
}

/// In-memory catalog.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    /// Catalog of the given entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Catalog with one entry per id, handles assigned by position.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = ids
            .into_iter()
            .enumerate()
            .map(|(idx, id)| CatalogEntry {
                id: id.into(),
                image: ImageHandle(u32::try_from(idx).unwrap_or(u32::MAX)),
            })
            .collect();
        Self { entries }
    }

    /// Catalog of `n` generated ids (`T000`, `T001`, ...).
    pub fn numbered(n: usize) -> Self {
        Self::from_ids((0..n).map(|i| format!("T{i:03}")))
    }
}

impl CatalogSource for StaticCatalog {
    fn load(&mut self) -> TitleGridResult<Vec<CatalogEntry>> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/source.rs"]
mod tests;
