use etl::document::{self, Node};
use etl::Result;

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Lists the `*.xml` files of one message-category directory, sorted
/// lexicographically by filename so that last-write-wins merges downstream
/// don't depend on directory traversal order. A missing directory yields an
/// empty list (a run may legitimately have no documents of a category).
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];

    if !dir.is_dir() {
        log::warn!("Input directory not found, treating as empty: {dir:?}");
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_xml = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("xml"));

        if is_xml {
            files.push(path);
        }
    }

    files.sort();

    return Ok(files);
}

/// Reads and parses every document of a category. An unreadable or
/// structurally unparseable file is logged and skipped; its transactions
/// never enter the pipeline.
pub fn read_documents(dir: &Path) -> Result<Vec<Node>> {
    let mut documents = vec![];

    for path in list_xml_files(dir)? {
        log::debug!("Parsing document: {path:?}");

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Skipping unreadable document {path:?}: {e}");
                continue;
            }
        };

        match document::parse(&contents) {
            Ok(root) => documents.push(root),
            Err(e) => log::warn!("Skipping unparseable document {path:?}: {e}"),
        }
    }

    return Ok(documents);
}
