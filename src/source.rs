//! Reading schema listings and running the import pipeline.

use crate::hierarchy::Hierarchy;
use crate::parser::parse_lines;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Raw lines of an opened listing file.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing the
/// read. A trailing `\r` is dropped.
pub struct LineSource {
    path: PathBuf,
    lines: Split<BufReader<File>>,
}

impl Iterator for LineSource {
    type Item = Result<String, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            let mut bytes = line.map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        })
    }
}

/// Open a listing file for line-by-line reading.
pub fn open(path: impl AsRef<Path>) -> Result<LineSource, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LineSource {
        path: path.to_path_buf(),
        lines: BufReader::new(file).split(b'\n'),
    })
}

/// Parse and link already-acquired lines.
pub fn import_lines<I, S>(lines: I) -> Hierarchy
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let hierarchy = Hierarchy::link(parse_lines(lines));

    for link in hierarchy.ambiguous_links() {
        if let Some(child) = hierarchy.get(link.child) {
            tracing::warn!(
                kind = %child.kind,
                name = %child.name,
                parents = link.parents.len(),
                "record matches more than one parent; attached to all of them"
            );
        }
    }

    tracing::info!(
        records = hierarchy.len(),
        databases = hierarchy.roots().count(),
        "import linked"
    );

    hierarchy
}

/// Import a listing file from scratch.
///
/// Every line is read before anything is parsed, so a read failure
/// midway yields no hierarchy at all.
pub fn import_file(path: impl AsRef<Path>) -> Result<Hierarchy, LoadError> {
    let lines = open(path)?.collect::<Result<Vec<_>, _>>()?;
    Ok(import_lines(lines))
}
