//! On-disk document store.
//!
//! Each document lives in its own directory holding a JSON metadata
//! file and, once extraction succeeded, the extracted text.

use crate::core::error::{Result, VaultError};
use crate::core::storage::extract::{clean_text, extract_pdf_text, guess_mime_type, PDF_MIME_TYPE};
use crate::core::storage::walker::FileWalker;
use crate::core::storage::DocumentSource;
use crate::core::types::{Document, DocumentMetadata, DocumentStatus, ImportStats};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use uuid::Uuid;

/// Default per-file size cap for imports
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;

/// Default cap on extracted characters per document
pub const DEFAULT_MAX_EXTRACTED_CHARS: usize = 100_000;

/// Filesystem-backed document store
pub struct DocumentStore {
    /// Root data directory
    data_dir: PathBuf,
    max_file_size_mb: usize,
    max_extracted_chars: usize,
}

impl DocumentStore {
    /// Create a store rooted at `data_dir` with default import limits
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            max_extracted_chars: DEFAULT_MAX_EXTRACTED_CHARS,
        }
    }

    /// Override the import limits
    pub fn with_limits(mut self, max_file_size_mb: usize, max_extracted_chars: usize) -> Self {
        self.max_file_size_mb = max_file_size_mb;
        self.max_extracted_chars = max_extracted_chars;
        self
    }

    /// Root data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn documents_dir(&self) -> PathBuf {
        self.data_dir.join("documents")
    }

    fn document_dir(&self, id: &str) -> PathBuf {
        self.documents_dir().join(id)
    }

    fn metadata_path(&self, id: &str) -> PathBuf {
        self.document_dir(id).join("meta.json")
    }

    fn text_path(&self, id: &str) -> PathBuf {
        self.document_dir(id).join("text.txt")
    }

    /// Ids are generated by the store; anything that could escape the
    /// documents directory is treated as unknown.
    fn check_id(id: &str) -> Result<()> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(VaultError::DocumentNotFound(id.to_string()))
        }
    }

    fn write_metadata(&self, metadata: &DocumentMetadata) -> Result<()> {
        let json = serde_json::to_string_pretty(metadata)?;
        fs::write(self.metadata_path(&metadata.id), json)?;
        Ok(())
    }

    /// Register a new document in `processing` state
    pub fn create_document(
        &self,
        filename: &str,
        file_size: u64,
        mime_type: &str,
    ) -> Result<DocumentMetadata> {
        let id = Uuid::new_v4().to_string();
        fs::create_dir_all(self.document_dir(&id))?;

        let metadata = DocumentMetadata {
            id,
            filename: filename.to_string(),
            file_size,
            mime_type: mime_type.to_string(),
            created_at: Utc::now(),
            status: DocumentStatus::Processing,
            error_message: None,
            source_path: None,
            text_chars: 0,
        };

        self.write_metadata(&metadata)?;
        tracing::debug!("Created document {} ({})", metadata.id, metadata.filename);

        Ok(metadata)
    }

    /// Store extracted text and mark the document `ready`
    pub fn complete_document(&self, id: &str, text: &str) -> Result<DocumentMetadata> {
        let mut metadata = self.get_metadata(id)?;

        fs::write(self.text_path(id), text)?;

        metadata.status = DocumentStatus::Ready;
        metadata.error_message = None;
        metadata.text_chars = text.chars().count();
        self.write_metadata(&metadata)?;

        Ok(metadata)
    }

    /// Mark the document `error` with a reason
    pub fn fail_document(&self, id: &str, message: &str) -> Result<DocumentMetadata> {
        let mut metadata = self.get_metadata(id)?;

        metadata.status = DocumentStatus::Error;
        metadata.error_message = Some(message.to_string());
        self.write_metadata(&metadata)?;

        tracing::warn!("Document {} failed: {}", id, message);
        Ok(metadata)
    }

    /// Load document metadata
    pub fn get_metadata(&self, id: &str) -> Result<DocumentMetadata> {
        Self::check_id(id)?;
        let meta_path = self.metadata_path(id);

        if !meta_path.exists() {
            return Err(VaultError::DocumentNotFound(id.to_string()));
        }

        let contents = fs::read_to_string(&meta_path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load a document together with its text, if any
    pub fn get_document(&self, id: &str) -> Result<Document> {
        let metadata = self.get_metadata(id)?;

        let text_path = self.text_path(id);
        let text = if text_path.exists() {
            Some(fs::read_to_string(text_path)?)
        } else {
            None
        };

        Ok(Document::from_metadata(metadata, text))
    }

    /// List all documents, newest first
    ///
    /// Directories with unreadable metadata are skipped.
    pub fn list_documents(&self) -> Result<Vec<DocumentMetadata>> {
        let mut documents = self.read_all_metadata()?;
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(documents)
    }

    fn read_all_metadata(&self) -> Result<Vec<DocumentMetadata>> {
        let documents_dir = self.documents_dir();

        if !documents_dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in fs::read_dir(documents_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(id) = entry.file_name().to_str() {
                match self.get_metadata(id) {
                    Ok(metadata) => documents.push(metadata),
                    Err(e) => tracing::warn!("Skipping document {}: {}", id, e),
                }
            }
        }

        Ok(documents)
    }

    /// Remove a document and its text
    pub fn delete_document(&self, id: &str) -> Result<()> {
        Self::check_id(id)?;
        let document_dir = self.document_dir(id);

        if !document_dir.exists() {
            return Err(VaultError::DocumentNotFound(id.to_string()));
        }

        fs::remove_dir_all(document_dir)?;
        tracing::info!("Deleted document {}", id);
        Ok(())
    }

    /// Check if a document exists
    pub fn document_exists(&self, id: &str) -> bool {
        Self::check_id(id).is_ok() && self.metadata_path(id).exists()
    }

    /// Import a single file as a document
    ///
    /// PDFs go through [`extract_pdf_text`], everything else is read as text.
    /// The document is created in `processing` state and ends either
    /// `ready` or `error`; extraction failures are recorded on the
    /// document rather than returned.
    pub fn import_file(&self, path: &Path) -> Result<DocumentMetadata> {
        if !path.is_file() {
            return Err(VaultError::InvalidPath(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| VaultError::InvalidPath(path.display().to_string()))?;
        let file_size = fs::metadata(path)?.len();

        let mime_type = guess_mime_type(path);
        let mut metadata = self.create_document(&filename, file_size, &mime_type)?;
        metadata.source_path = Some(path.to_path_buf());
        self.write_metadata(&metadata)?;

        let max_bytes = (self.max_file_size_mb as u64) * 1024 * 1024;
        if file_size > max_bytes {
            return self.fail_document(
                &metadata.id,
                &format!("File exceeds {} MB limit", self.max_file_size_mb),
            );
        }

        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) => return self.fail_document(&metadata.id, &format!("Read failed: {e}")),
        };

        let text = if mime_type == PDF_MIME_TYPE {
            extract_pdf_text(&raw, &filename, self.max_extracted_chars)
        } else {
            clean_text(&raw, self.max_extracted_chars)
        };
        if text.is_empty() {
            return self.fail_document(&metadata.id, "No text could be extracted");
        }

        self.complete_document(&metadata.id, &text)
    }

    /// Import every matching file under a directory
    pub fn import_directory(
        &self,
        root: &Path,
        include: &[String],
        exclude: &[String],
    ) -> Result<ImportStats> {
        let start = Instant::now();

        let walker = FileWalker::new(include, exclude, self.max_file_size_mb)?;
        let files = walker.collect_files(root)?;

        tracing::info!("Found {} files to import in {:?}", files.len(), root);

        let mut stats = ImportStats::default();

        for (i, file) in files.iter().enumerate() {
            match self.import_file(file) {
                Ok(metadata) => {
                    if metadata.status == DocumentStatus::Ready {
                        stats.documents_ready += 1;
                    } else {
                        stats.documents_failed += 1;
                    }
                    stats.document_ids.push(metadata.id);
                }
                Err(e) => {
                    tracing::warn!("Failed to import {:?}: {}", file, e);
                    stats.documents_failed += 1;
                }
            }

            if (i + 1) % 100 == 0 {
                tracing::info!("Imported {}/{} files", i + 1, files.len());
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Import complete: {} ready, {} failed in {}ms",
            stats.documents_ready,
            stats.documents_failed,
            stats.duration_ms
        );

        Ok(stats)
    }
}

impl DocumentSource for DocumentStore {
    /// Ready documents with text, oldest first
    fn load_searchable(&self) -> Result<Vec<Document>> {
        let mut ready: Vec<DocumentMetadata> = self
            .read_all_metadata()?
            .into_iter()
            .filter(|m| m.status == DocumentStatus::Ready)
            .collect();
        ready.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let mut documents = Vec::with_capacity(ready.len());
        for metadata in ready {
            let text_path = self.text_path(&metadata.id);
            let text = match fs::read_to_string(&text_path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Missing text for document {}: {}", metadata.id, e);
                    continue;
                }
            };

            let document = Document::from_metadata(metadata, Some(text));
            if document.is_searchable() {
                documents.push(document);
            }
        }

        Ok(documents)
    }
}
