//! Typed row model for one parsed capture export.

use serde::{Deserialize, Serialize};

/// A single captured packet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketRow {
    /// Frame length in bytes
    pub frame_len: u64,

    /// Capture index of the frame
    pub frame_number: u64,

    /// Source address as exported (may be empty for non-IP frames)
    pub ip_src: String,

    /// Destination address as exported (may be empty for non-IP frames)
    pub ip_dst: String,

    /// Capture-relative time in seconds
    pub time: f64,
}

impl PacketRow {
    /// Convenience constructor, mostly for tests and fixtures
    pub fn new(
        frame_number: u64,
        frame_len: u64,
        ip_src: impl Into<String>,
        ip_dst: impl Into<String>,
        time: f64,
    ) -> Self {
        Self {
            frame_len,
            frame_number,
            ip_src: ip_src.into(),
            ip_dst: ip_dst.into(),
            time,
        }
    }
}

/// All rows of one capture file, in capture order
///
/// An empty trace is a normal outcome (the action produced no traffic).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub rows: Vec<PacketRow>,
}

impl TraceRecord {
    pub fn new(rows: Vec<PacketRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when `time` never decreases from one row to the next
    pub fn is_time_ordered(&self) -> bool {
        self.rows.windows(2).all(|pair| pair[0].time <= pair[1].time)
    }
}
