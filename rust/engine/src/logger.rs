use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{Hand, Keep};
use crate::scoring::ScoreBreakdown;

/// Best keep summary stored alongside a scored deal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeepRecord {
    /// Cards kept
    pub kept: Vec<Card>,
    /// Cards thrown away
    pub discarded: Vec<Card>,
    /// Score of the kept cards
    pub score: u32,
}

impl From<&Keep> for KeepRecord {
    fn from(keep: &Keep) -> Self {
        Self {
            kept: keep.kept.cards().to_vec(),
            discarded: keep.discarded.clone(),
            score: keep.score,
        }
    }
}

/// One scored hand, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unique identifier for this record (format: crib-NNNNNN)
    pub hand_id: String,
    /// RNG seed the deal came from, when it was shuffled
    pub seed: Option<u64>,
    /// Cards in the order they were dealt
    pub cards: Vec<Card>,
    /// Per-rule points for the full hand
    pub breakdown: ScoreBreakdown,
    /// Sum of the breakdown
    pub total: u32,
    /// Best keep, when one was searched for
    #[serde(default)]
    pub best: Option<KeepRecord>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl ScoreRecord {
    pub fn new(hand_id: String, seed: Option<u64>, hand: &Hand, best: Option<&Keep>) -> Self {
        let breakdown = hand.breakdown();
        Self {
            hand_id,
            seed,
            cards: hand.cards().to_vec(),
            breakdown,
            total: breakdown.total(),
            best: best.map(KeepRecord::from),
            ts: None,
        }
    }
}

pub fn format_hand_id(seq: u32) -> String {
    format!("crib-{:06}", seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ScoreLogger {
    writer: Option<BufWriter<File>>,
    seq: u32,
}

impl ScoreLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            seq: 0,
        })
    }

    /// A logger that only hands out ids and discards writes.
    pub fn sink() -> Self {
        Self {
            writer: None,
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(self.seq)
    }

    pub fn write(&mut self, record: &ScoreRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
