//! Result types returned by the conversion entry points.

use crate::pipeline::Stage;
use serde::Serialize;

/// What a single pipeline stage did to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    /// Line count handed to the stage.
    pub lines_in: usize,
    /// Line count the stage produced.
    pub lines_out: usize,
    /// Whether any line was added, removed or rewritten.
    pub changed: bool,
}

/// Summary statistics for one conversion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionStats {
    pub input_lines: usize,
    pub output_lines: usize,
    /// One entry per stage, in pipeline order.
    pub stages: Vec<StageReport>,
    pub duration_ms: u64,
}

impl ConversionStats {
    /// Stages that actually rewrote something.
    pub fn changed_stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.stages.iter().filter(|r| r.changed).map(|r| r.stage)
    }
}

/// The converted Quarto document plus its statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    /// Full text of the Quarto document.
    pub qmd: String,
    pub stats: ConversionStats,
}
