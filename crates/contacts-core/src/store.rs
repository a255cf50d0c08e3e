// crates/contacts-core/src/store.rs - CSV-backed contact table
//
// The store owns exactly one file and knows HOW to read and write it. It does
// not decide WHAT to write; that is the job of the command handlers.
//
// FILE FORMAT:
// ```text
// number,last_name,first_name,middle_name,organization,work_phone,personal_phone
// 1,Doe,John,M,Acme,12345678901,None
// ```
// - UTF-8, comma separated, quoting only where a value needs it
// - One canonical column order for the header and every row
//
// WRITE PATTERNS:
// - create:  header only, refuses to clobber an existing file
// - append:  one row at the end, existing bytes untouched
// - save:    whole-file rewrite (header + every row)
//
// LEGACY FILES:
// Older contact files were written with `first_name` and `last_name` swapped in
// the header while the rows themselves used the canonical order. Such files
// are read positionally and get a corrected header on the next `save`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::contact::{Contact, NameKey};

/// Canonical header row
pub const HEADER: [&str; 7] = [
    "number",
    "last_name",
    "first_name",
    "middle_name",
    "organization",
    "work_phone",
    "personal_phone",
];

/// Header written by earlier versions of the tool
pub const LEGACY_HEADER: [&str; 7] = [
    "number",
    "first_name",
    "last_name",
    "middle_name",
    "organization",
    "work_phone",
    "personal_phone",
];

/// Errors raised by the contact store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Contact file not found: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("Contact file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Malformed contact file {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Row position {position} is out of range for a table of {len} rows")]
    RowOutOfRange { position: usize, len: usize },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory copy of the whole contact table, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactTable {
    rows: Vec<Contact>,
}

impl ContactTable {
    pub fn new(rows: Vec<Contact>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Contact> {
        self.rows.get(position)
    }

    /// Number to assign to the next added contact
    ///
    /// Uses the largest number present rather than the last row's, so tables
    /// that were sorted or hand-edited still get a fresh key. Empty tables
    /// start at 1.
    pub fn next_number(&self) -> u32 {
        self.rows
            .iter()
            .map(|contact| contact.number)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Positions of every row whose full name equals `key`
    pub fn positions_by_name(&self, key: &NameKey) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.has_name(key))
            .map(|(position, _)| position)
            .collect()
    }

    /// Among `positions`, find the one whose row carries `number`
    pub fn position_of_number(&self, positions: &[usize], number: u32) -> Option<usize> {
        positions
            .iter()
            .copied()
            .find(|&position| self.rows.get(position).is_some_and(|c| c.number == number))
    }

    /// Replace the row at `position`, returning the previous contents
    pub fn replace(&mut self, position: usize, contact: Contact) -> StoreResult<Contact> {
        let len = self.rows.len();
        let slot = self
            .rows
            .get_mut(position)
            .ok_or(StoreError::RowOutOfRange { position, len })?;
        Ok(std::mem::replace(slot, contact))
    }
}

/// Reads and writes the contact file at a fixed path
///
/// The path is injected at construction; nothing in the store consults
/// global state. Every read goes back to disk, so the file stays the single
/// source of truth between operations.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the file containing only the header row
    ///
    /// Parent directories are created as needed. Fails with
    /// [`StoreError::AlreadyExists`] instead of truncating an existing file.
    pub fn create(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(self.path.clone()),
                _ => self.io_error(source),
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(HEADER)
            .map_err(|source| self.csv_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;

        info!(path = %self.path.display(), "created contact file");
        Ok(())
    }

    /// Load every row of the table
    ///
    /// Returns [`StoreError::FileMissing`] when the file does not exist so
    /// callers can decide whether that is recoverable. A zero-byte file or a
    /// header-only file loads as an empty table.
    pub fn load(&self) -> StoreResult<ContactTable> {
        let file = self.open_existing(OpenOptions::new().read(true))?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader
            .headers()
            .map_err(|source| self.csv_error(source))?
            .clone();
        let legacy = headers.iter().eq(LEGACY_HEADER);
        if legacy {
            warn!(
                path = %self.path.display(),
                "legacy header detected; reading rows positionally"
            );
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| self.csv_error(source))?;
            let field_names = if legacy { None } else { Some(&headers) };
            let contact: Contact = record
                .deserialize(field_names)
                .map_err(|source| self.csv_error(source))?;
            rows.push(contact);
        }

        debug!(path = %self.path.display(), rows = rows.len(), "loaded contact table");
        Ok(ContactTable::new(rows))
    }

    /// Append one row without touching the existing contents
    ///
    /// A zero-byte file gets the header first. A hand-edited file whose last
    /// line lacks a line break gets one, so the new row starts on its own line.
    pub fn append(&self, contact: &Contact) -> StoreResult<()> {
        let mut file = self.open_existing(OpenOptions::new().read(true).append(true))?;
        let empty = file
            .metadata()
            .map_err(|source| self.io_error(source))?
            .len()
            == 0;
        if !empty && !self.ends_with_newline(&mut file)? {
            debug!(path = %self.path.display(), "terminating last line before append");
            file.write_all(b"\n").map_err(|source| self.io_error(source))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if empty {
            warn!(path = %self.path.display(), "empty contact file, writing header");
            writer
                .write_record(HEADER)
                .map_err(|source| self.csv_error(source))?;
        }
        writer
            .serialize(contact)
            .map_err(|source| self.csv_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), number = contact.number, "appended contact");
        Ok(())
    }

    /// Rewrite the whole file from `table`
    ///
    /// Not atomic: an interruption mid-write can leave a truncated file.
    pub fn save(&self, table: &ContactTable) -> StoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|source| self.csv_error(source))?;
        writer
            .write_record(HEADER)
            .map_err(|source| self.csv_error(source))?;
        for contact in table.rows() {
            writer
                .serialize(contact)
                .map_err(|source| self.csv_error(source))?;
        }
        writer.flush().map_err(|source| self.io_error(source))?;

        info!(path = %self.path.display(), rows = table.len(), "rewrote contact file");
        Ok(())
    }

    fn ends_with_newline(&self, file: &mut File) -> StoreResult<bool> {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|source| self.io_error(source))?;
        Ok(last[0] == b'\n')
    }

    fn open_existing(&self, options: &OpenOptions) -> StoreResult<File> {
        options.open(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::FileMissing(self.path.clone()),
            _ => self.io_error(source),
        })
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
