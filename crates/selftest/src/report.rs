//! Plain-text report on standard output.
//!
//! ```text
//! BLS version: 0.3.13
//! BLS test: failed
//!   validator pubkey 3 mismatch: 0x... != 0x...
//! ```

use std::io::{self, Write};

use crate::model::HarnessReport;

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Version line plus the `BLS test: ` prefix, flushed before the harness starts.
    pub fn banner(&mut self, bls_version: &str) -> io::Result<()> {
        writeln!(self.out, "BLS version: {}", bls_version)?;
        write!(self.out, "BLS test: ")?;
        self.out.flush()
    }

    /// Verdict, then every record indented by two spaces in collection order.
    pub fn verdict(&mut self, report: &HarnessReport) -> io::Result<()> {
        writeln!(self.out, "{}", report.verdict())?;
        for error in &report.errors {
            writeln!(self.out, "  {}", error)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
