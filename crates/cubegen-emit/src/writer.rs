//! Line-oriented literal writer.
//!
//! [`LiteralWriter`] streams rendered placements to any `Write` sink, one
//! record per line.

use std::io::Write;

use cubegen_core::{GridConfig, SpherePlacement};

use crate::emitter::LatticeEmitter;
use crate::error::EmitError;
use crate::literal::SphereLiteral;

/// Writes placement records as initializer-literal lines.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and the binary can
/// use a buffered stdout lock.
///
/// # Examples
///
/// ```
/// use cubegen_core::GridConfig;
/// use cubegen_emit::{LatticeEmitter, LiteralWriter};
///
/// let emitter = LatticeEmitter::new(GridConfig::default().with_half_extent(0)).unwrap();
/// let mut writer = LiteralWriter::new(Vec::new());
/// writer.write_all_from(&emitter).unwrap();
/// assert_eq!(writer.records_written(), 1);
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "{XMFLOAT3(0.00f, 0.00f, 0.00f), 0.45f },\n");
/// ```
pub struct LiteralWriter<W: Write> {
    writer: W,
    records_written: usize,
}

impl<W: Write> LiteralWriter<W> {
    /// Wrap a sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Write one record followed by a newline.
    pub fn write_placement(&mut self, placement: &SpherePlacement) -> Result<(), EmitError> {
        writeln!(self.writer, "{}", SphereLiteral(placement))?;
        self.records_written += 1;
        Ok(())
    }

    /// Write every placement of `emitter` in canonical order.
    ///
    /// Returns the number of records written by this call.
    pub fn write_all_from(&mut self, emitter: &LatticeEmitter) -> Result<usize, EmitError> {
        let before = self.records_written;
        for placement in emitter.placements() {
            self.write_placement(&placement)?;
        }
        Ok(self.records_written - before)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), EmitError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Validate `config`, write every record to `sink`, and flush.
///
/// Nothing is written if the configuration is rejected. Returns the number
/// of records written.
pub fn emit<W: Write>(config: GridConfig, sink: W) -> Result<usize, EmitError> {
    let emitter = LatticeEmitter::new(config)?;
    let mut writer = LiteralWriter::new(sink);
    let written = writer.write_all_from(&emitter)?;
    writer.flush()?;
    Ok(written)
}
