//! Import session: one upload flowing through parse, map, validate and
//! transform.
//!
//! Reading a file happens outside the session. A caller takes an
//! [`UploadTicket`] with [`ImportSession::begin_upload`], reads the file,
//! then hands the outcome to [`ImportSession::complete_upload`]. Only the
//! most recent ticket is accepted, so a slow read that finishes after a
//! newer upload started cannot overwrite it. A failed read puts the
//! session in [`SessionState::ReadFailed`] instead of leaving it stuck.

use std::fmt;
use std::path::Path;

use asset_ingest::{IngestError, build_column_profiles, parse_csv_text, read_import_text};
use asset_map::{MappingState, MappingSummary};
use asset_model::{ColumnProfile, FieldKey, ImportedRecord, RawTable, ValidationReport};
use asset_transform::transform_table;
use asset_validate::{can_proceed, validate_table};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::options::ImportOptions;

/// Step of the import workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing uploaded yet.
    Idle,
    /// An upload is being read.
    Reading,
    /// The last read failed.
    ReadFailed,
    /// File parsed; columns may be (re)mapped.
    Mapping,
    /// Findings are available for the current mapping.
    Validated,
    /// Records were produced.
    Completed,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Reading => "reading",
            Self::ReadFailed => "read-failed",
            Self::Mapping => "mapping",
            Self::Validated => "validated",
            Self::Completed => "completed",
        }
    }

    fn can_map(self) -> bool {
        matches!(self, Self::Mapping | Self::Validated)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle for one in-flight upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct ImportSession {
    options: ImportOptions,
    state: SessionState,
    last_ticket: u64,
    pending: Option<UploadTicket>,
    table: RawTable,
    mapping: MappingState,
    report: Option<ValidationReport>,
    records: Vec<ImportedRecord>,
    read_error: Option<String>,
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new(ImportOptions::default())
    }
}

impl ImportSession {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            state: SessionState::Idle,
            last_ticket: 0,
            pending: None,
            table: RawTable::default(),
            mapping: MappingState::default(),
            report: None,
            records: Vec::new(),
            read_error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Starts a new upload, superseding any upload still being read.
    ///
    /// Data from the previous upload is dropped, so nothing can be imported
    /// until the new read completes.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.last_ticket += 1;
        let ticket = UploadTicket(self.last_ticket);
        if let Some(previous) = self.pending.replace(ticket) {
            debug!(previous = previous.id(), current = ticket.id(), "upload superseded");
        }
        self.state = SessionState::Reading;
        self.read_error = None;
        self.table = RawTable::default();
        self.mapping = MappingState::default();
        self.report = None;
        self.records.clear();
        ticket
    }

    /// Delivers the outcome of reading the file for `ticket`.
    ///
    /// Stale tickets are rejected and leave the session untouched.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        outcome: std::result::Result<String, IngestError>,
    ) -> Result<()> {
        if self.pending != Some(ticket) {
            warn!(ticket = ticket.id(), "ignoring stale upload");
            return Err(SessionError::StaleUpload {
                ticket: ticket.id(),
                current: self.pending.map(UploadTicket::id),
            });
        }
        self.pending = None;
        match outcome {
            Ok(text) => {
                self.load(&text);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "upload read failed");
                self.state = SessionState::ReadFailed;
                self.read_error = Some(err.to_string());
                Err(SessionError::Read(err))
            }
        }
    }

    /// Loads already-decoded text as a fresh upload.
    pub fn load_text(&mut self, text: &str) -> Result<()> {
        let ticket = self.begin_upload();
        self.complete_upload(ticket, Ok(text.to_string()))
    }

    /// Reads and loads a file as a fresh upload.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let ticket = self.begin_upload();
        self.complete_upload(ticket, read_import_text(path))
    }

    fn load(&mut self, text: &str) {
        if let Some(limit) = self.options.max_file_bytes
            && text.len() as u64 > limit
        {
            warn!(bytes = text.len(), limit, "import file exceeds advisory size");
        }
        self.table = parse_csv_text(text);
        self.mapping = MappingState::new(build_column_profiles(&self.table));
        if self.options.auto_map {
            self.mapping.auto_map();
        }
        self.report = None;
        self.records.clear();
        self.state = SessionState::Mapping;
        info!(
            columns = self.table.column_count(),
            rows = self.table.row_count(),
            "{} rows detected",
            self.table.row_count()
        );
    }

    /// Message of the last failed read, if the session is in `ReadFailed`.
    pub fn read_error(&self) -> Option<&str> {
        self.read_error.as_deref()
    }

    pub fn table(&self) -> &RawTable {
        &self.table
    }

    /// Number of non-blank data rows in the current upload.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn columns(&self) -> &[ColumnProfile] {
        self.mapping.columns()
    }

    pub fn mapping_summary(&self) -> MappingSummary {
        self.mapping.summary()
    }

    fn ensure_mappable(&mut self, action: &'static str) -> Result<()> {
        if !self.state.can_map() {
            return Err(SessionError::InvalidState {
                action,
                state: self.state,
            });
        }
        self.report = None;
        self.state = SessionState::Mapping;
        Ok(())
    }

    /// Re-runs the heuristic mapper; returns the number of changed columns.
    pub fn auto_map(&mut self) -> Result<usize> {
        self.ensure_mappable("auto-map")?;
        Ok(self.mapping.auto_map())
    }

    pub fn set_mapping(&mut self, index: usize, field: Option<FieldKey>) -> Result<()> {
        self.ensure_mappable("change mapping")?;
        self.mapping.set_mapping(index, field)?;
        Ok(())
    }

    pub fn set_mapping_by_name(&mut self, name: &str, field: Option<FieldKey>) -> Result<()> {
        self.ensure_mappable("change mapping")?;
        self.mapping.set_mapping_by_name(name, field)?;
        Ok(())
    }

    /// Validates the current mapping.
    pub fn validate(&mut self) -> Result<&ValidationReport> {
        if !self.state.can_map() {
            return Err(SessionError::InvalidState {
                action: "validate",
                state: self.state,
            });
        }
        let report = validate_table(&self.table, self.mapping.columns());
        self.state = SessionState::Validated;
        Ok(self.report.insert(report))
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Runs the validation gate and, when it passes, builds the records.
    ///
    /// With blocking errors the session returns to the mapping step and
    /// the report stays available for remediation.
    pub fn import(&mut self) -> Result<&[ImportedRecord]> {
        if !self.state.can_map() {
            return Err(SessionError::InvalidState {
                action: "import",
                state: self.state,
            });
        }
        if self.state == SessionState::Mapping || self.report.is_none() {
            self.validate()?;
        }
        let report = self.report.as_ref().ok_or(SessionError::InvalidState {
            action: "import",
            state: self.state,
        })?;
        if !can_proceed(report) {
            let count = report.error_count();
            warn!(errors = count, "import blocked");
            self.state = SessionState::Mapping;
            return Err(SessionError::BlockingErrors { count });
        }
        self.records = transform_table(&self.table, self.mapping.columns());
        self.state = SessionState::Completed;
        info!(records = self.records.len(), "import completed");
        Ok(&self.records)
    }

    /// Runs [`import`](Self::import) and hands the records to `on_complete`.
    pub fn import_with<F>(&mut self, on_complete: F) -> Result<()>
    where
        F: FnOnce(Vec<ImportedRecord>),
    {
        self.import()?;
        on_complete(std::mem::take(&mut self.records));
        Ok(())
    }

    pub fn records(&self) -> &[ImportedRecord] {
        &self.records
    }

    /// Consumes the session, returning the imported records.
    pub fn into_records(self) -> Vec<ImportedRecord> {
        self.records
    }

    /// Drops the current upload and returns to `Idle`.
    pub fn reset(&mut self) {
        let options = self.options;
        let last_ticket = self.last_ticket;
        *self = Self::new(options);
        self.last_ticket = last_ticket;
    }
}
