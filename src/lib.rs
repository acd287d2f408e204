mod sample_data;
mod ty;

use std::io::{self, Write};

pub use ty::block::LogBlock;
pub use ty::kind::SampleKind;

/// The three fixture samples fed to multiline chunking tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Samples {
    pub java_log: LogBlock,
    pub python_log: LogBlock,
    pub config_log: LogBlock,
}

impl Samples {
    pub fn get(&self, kind: SampleKind) -> LogBlock {
        match kind {
            SampleKind::Java => self.java_log,
            SampleKind::Python => self.python_log,
            SampleKind::Config => self.config_log,
        }
    }
}

pub fn generate_samples() -> Samples {
    Samples {
        java_log: LogBlock::new(sample_data::JAVA_LOG),
        python_log: LogBlock::new(sample_data::PYTHON_LOG),
        config_log: LogBlock::new(sample_data::CONFIG_LOG),
    }
}

/// Writes selected samples, each under its section header. Blocks after the first are preceded by
/// a blank line. With `hints` set, a `# chunk with: ...` comment follows every header.
pub fn write_samples<W: Write>(
    out: &mut W,
    samples: &Samples,
    kinds: &[SampleKind],
    hints: bool,
) -> io::Result<()> {
    for (n, kind) in kinds.iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", kind.header())?;
        if hints {
            writeln!(out, "# chunk with: {}", kind.chunk_hint())?;
        }
        writeln!(out, "{}", samples.get(*kind))?;
    }
    Ok(())
}
