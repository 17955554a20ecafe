use formatx::formatx;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Destination for result documents, keyed by what the document is
/// ("estimate", "projection", "costs") rather than where it lands.
pub trait Output: Debug {
    fn writer_for_document_key(&self, document_key: &str) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op, so that code that only writes results can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

/// Writes each result document to a file in a directory, naming files from a
/// formatx template with one placeholder for the document key, e.g.
/// `"profile_a_{}.csv"`.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_document_key(&self, document_key: &str) -> anyhow::Result<impl Write> {
        Ok(BufWriter::new(File::create(self.directory_path.join(
            formatx!(&self.file_template, document_key).unwrap(),
        ))?))
    }
}

impl Output for &FileOutput {
    fn writer_for_document_key(&self, document_key: &str) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_document_key(self, document_key)
    }
}

/// An output that discards everything written to it.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_document_key(&self, _document_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}
