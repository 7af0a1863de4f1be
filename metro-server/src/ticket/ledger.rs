//! Append-only ticket ledger.
//!
//! The ledger is the only shared mutable state in the server. Both
//! implementations serialize appends behind a mutex.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::Ticket;

/// Errors from reading or writing the ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// File I/O failed
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A ledger entry could not be encoded or decoded
    #[error("ledger JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A writer panicked while holding the ledger lock
    #[error("ledger lock poisoned")]
    Poisoned,
}

/// Append-only store of issued tickets.
pub trait Ledger: Send + Sync {
    /// Record a ticket. Entries are never modified or removed.
    fn append(&self, ticket: &Ticket) -> Result<(), LedgerError>;

    /// All recorded tickets in the order they were appended.
    fn tickets(&self) -> Result<Vec<Ticket>, LedgerError>;
}

/// In-memory ledger, lost on restart.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    tickets: Mutex<Vec<Ticket>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for MemoryLedger {
    fn append(&self, ticket: &Ticket) -> Result<(), LedgerError> {
        let mut guard = self.tickets.lock().map_err(|_| LedgerError::Poisoned)?;
        guard.push(ticket.clone());
        Ok(())
    }

    fn tickets(&self) -> Result<Vec<Ticket>, LedgerError> {
        let guard = self.tickets.lock().map_err(|_| LedgerError::Poisoned)?;
        Ok(guard.clone())
    }
}

/// Ledger stored as a JSON Lines file: one ticket per line.
#[derive(Debug)]
pub struct JsonLinesLedger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesLedger {
    /// Open a ledger at `path`, creating parent directories if needed.
    ///
    /// The file itself is created on first append.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Get the ledger file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Ledger for JsonLinesLedger {
    fn append(&self, ticket: &Ticket) -> Result<(), LedgerError> {
        let mut line = serde_json::to_string(ticket)?;
        line.push('\n');

        let _guard = self.lock.lock().map_err(|_| LedgerError::Poisoned)?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // Start on a fresh line if an earlier write was cut short
        if !ends_with_newline(&mut file)? {
            line.insert(0, '\n');
        }
        file.write_all(line.as_bytes())?;

        debug!(ticket = %ticket.id(), path = %self.path.display(), "appended ticket");
        Ok(())
    }

    fn tickets(&self) -> Result<Vec<Ticket>, LedgerError> {
        let _guard = self.lock.lock().map_err(|_| LedgerError::Poisoned)?;

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let complete = contents.is_empty() || contents.ends_with('\n');
        let lines: Vec<&str> = contents.lines().collect();
        let last = lines.len().saturating_sub(1);

        let mut tickets = Vec::with_capacity(lines.len());
        for (i, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(ticket) => tickets.push(ticket),
                // A torn final write is skipped; corruption elsewhere is an error
                Err(e) if i == last && !complete => {
                    warn!(path = %self.path.display(), error = %e, "skipping torn ledger entry");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(tickets)
    }
}

/// Whether the file is empty or its last byte is a newline.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fare, StationId};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn ticket(id: &str) -> Ticket {
        Ticket::new(
            id.to_string(),
            StationId::parse("A").unwrap(),
            StationId::parse("C").unwrap(),
            Fare::from_pence(210),
            vec![
                "Board Red at Alpha".to_string(),
                "Travel 2 stop(s) on Red to Charlie".to_string(),
            ],
            Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
            None,
        )
    }

    #[test]
    fn memory_ledger_keeps_order() {
        let ledger = MemoryLedger::new();
        assert!(ledger.tickets().unwrap().is_empty());

        ledger.append(&ticket("T-1")).unwrap();
        ledger.append(&ticket("T-2")).unwrap();

        let ids: Vec<_> = ledger
            .tickets()
            .unwrap()
            .into_iter()
            .map(|t| t.id().to_string())
            .collect();
        assert_eq!(ids, vec!["T-1", "T-2"]);
    }

    #[test]
    fn file_ledger_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let ledger = JsonLinesLedger::open(dir.path().join("tickets.jsonl")).unwrap();
        assert!(ledger.tickets().unwrap().is_empty());
    }

    #[test]
    fn file_ledger_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tickets.jsonl");
        let ledger = JsonLinesLedger::open(&path).unwrap();

        let first = ticket("T-1");
        let second = ticket("T-2");
        ledger.append(&first).unwrap();
        ledger.append(&second).unwrap();

        assert_eq!(ledger.tickets().unwrap(), vec![first.clone(), second]);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);

        // A fresh handle sees earlier appends
        let reopened = JsonLinesLedger::open(&path).unwrap();
        assert_eq!(reopened.tickets().unwrap()[0], first);
    }

    #[test]
    fn file_ledger_rejects_corrupt_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.jsonl");
        std::fs::write(&path, "not json\n").unwrap();

        let ledger = JsonLinesLedger::open(&path).unwrap();
        assert!(matches!(ledger.tickets(), Err(LedgerError::Json(_))));
    }

    #[test]
    fn file_ledger_skips_torn_final_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.jsonl");
        let ledger = JsonLinesLedger::open(&path).unwrap();

        let first = ticket("T-1");
        ledger.append(&first).unwrap();

        // Simulate a crash halfway through the next write
        let whole = serde_json::to_string(&ticket("T-2")).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(&whole.as_bytes()[..whole.len() / 2]).unwrap();
        drop(file);

        assert_eq!(ledger.tickets().unwrap(), vec![first.clone()]);

        // The next append starts on its own line
        let third = ticket("T-3");
        ledger.append(&third).unwrap();
        assert_eq!(ledger.tickets().unwrap(), vec![first, third]);
    }

    #[test]
    fn file_ledger_rejects_torn_line_before_the_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.jsonl");
        let good = serde_json::to_string(&ticket("T-1")).unwrap();
        std::fs::write(&path, format!("{{\"id\": \"T-0\"\n{good}\n")).unwrap();

        let ledger = JsonLinesLedger::open(&path).unwrap();
        assert!(matches!(ledger.tickets(), Err(LedgerError::Json(_))));
    }

    #[test]
    fn concurrent_appends_are_not_interleaved() {
        use std::sync::Arc;

        let dir = tempdir().unwrap();
        let ledger = Arc::new(JsonLinesLedger::open(dir.path().join("t.jsonl")).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        ledger.append(&ticket(&format!("T-{n}-{i}"))).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(ledger.tickets().unwrap().len(), 40);
    }
}
