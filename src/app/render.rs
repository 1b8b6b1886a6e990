//! JSON-lines sink for per-tick frames.

use anyhow::{Context, Result};
use murmuration_data::FrameSnapshot;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one JSON object per frame, one frame per line.
pub struct SnapshotWriter<W: Write> {
    out: BufWriter<W>,
    frames: u64,
}

impl SnapshotWriter<std::fs::File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create snapshot file {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::new(inner),
            frames: 0,
        }
    }

    pub fn write_frame(&mut self, frame: &FrameSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush snapshots: {}", e.error()))
    }
}
