//! Snapshot Collectors
//!
//! Sinks the simulation clock streams [`TickSnapshot`]s into. The engine
//! only knows the [`Collector`] trait; what happens to a recorded snapshot
//! (buffering, JSONL on disk, discarding) is the sink's business.

use std::fmt;
use std::io::Write;

use crate::snapshot::TickSnapshot;

/// Error type for snapshot recording.
#[derive(Debug)]
pub enum CollectError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "IO error: {}", e),
            CollectError::Serialize(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io(e) => Some(e),
            CollectError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

impl From<serde_json::Error> for CollectError {
    fn from(e: serde_json::Error) -> Self {
        CollectError::Serialize(e)
    }
}

/// Receives one snapshot per tick from the simulation clock.
pub trait Collector {
    fn record(&mut self, snapshot: &TickSnapshot) -> Result<(), CollectError>;
}

/// Buffers snapshots in memory. Used by tests and batch callers that want
/// the whole run before doing anything with it.
#[derive(Debug, Default)]
pub struct MemoryCollector {
    snapshots: Vec<TickSnapshot>,
}

impl MemoryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[TickSnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<TickSnapshot> {
        self.snapshots
    }

    pub fn last(&self) -> Option<&TickSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Collector for MemoryCollector {
    fn record(&mut self, snapshot: &TickSnapshot) -> Result<(), CollectError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}

/// Streams snapshots to a writer as JSON lines, one snapshot per line.
#[derive(Debug)]
pub struct JsonlCollector<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> JsonlCollector<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, CollectError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Collector for JsonlCollector<W> {
    fn record(&mut self, snapshot: &TickSnapshot) -> Result<(), CollectError> {
        let line = snapshot.to_json()?;
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{CreatureSnapshot, TrustCounts};

    fn snapshot_at(tick: u64) -> TickSnapshot {
        TickSnapshot::new(
            format!("snap_{:06}", tick),
            tick,
            CreatureSnapshot::new(10.0, 0.0, "peaceful", 0),
            TrustCounts::new(5, 3, 2),
        )
    }

    #[test]
    fn test_memory_collector_buffers_in_order() {
        let mut collector = MemoryCollector::new();
        assert!(collector.is_empty());

        collector.record(&snapshot_at(1)).unwrap();
        collector.record(&snapshot_at(2)).unwrap();

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.snapshots()[0].tick, 1);
        assert_eq!(collector.last().unwrap().tick, 2);
    }

    #[test]
    fn test_jsonl_collector_writes_one_line_per_snapshot() {
        let mut collector = JsonlCollector::new(Vec::new());
        collector.record(&snapshot_at(1)).unwrap();
        collector.record(&snapshot_at(2)).unwrap();
        assert_eq!(collector.lines_written(), 2);

        let buffer = collector.into_inner().unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first = TickSnapshot::from_json(lines[0]).unwrap();
        assert_eq!(first.tick, 1);
        let second = TickSnapshot::from_json(lines[1]).unwrap();
        assert_eq!(second.tick, 2);
    }
}
