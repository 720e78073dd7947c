//! Interactive front-end: upload a file, paste text or try a sample, then view and
//! export the analysis. Errors are shown and the session carries on.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::analysis::AnalysisResult;
use crate::display;
use crate::error::AppError;
use crate::export::{self, ReportMeta};
use crate::models::DocumentFormat;
use crate::pipeline::DocumentPipeline;
use crate::preflight;
use crate::samples::Sample;

const DEFAULT_PASTE_NAME: &str = "pasted_text.txt";

/// A line holding only this ends a paste; blank lines belong to the text.
const PASTE_END: &str = ".";

/// Counters reported when the session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub analyses: usize,
    pub failures: usize,
    pub exports: usize,
}

enum Step {
    Analyzed(Result<AnalysisResult, AppError>, Duration),
    Skipped,
    Eof,
}

impl Step {
    fn timed(analyze: impl FnOnce() -> Result<AnalysisResult, AppError>) -> Self {
        let start = Instant::now();
        let result = analyze();
        Step::Analyzed(result, start.elapsed())
    }
}

pub struct InteractiveSession<'p, R, W> {
    pipeline: &'p DocumentPipeline,
    input: R,
    output: W,
    export_dir: PathBuf,
    stats: SessionStats,
}

impl<'p, R: BufRead, W: Write> InteractiveSession<'p, R, W> {
    pub fn new(pipeline: &'p DocumentPipeline, input: R, output: W, export_dir: PathBuf) -> Self {
        Self {
            pipeline,
            input,
            output,
            export_dir,
            stats: SessionStats::default(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one line. `None` means the input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn run(&mut self) -> Result<SessionStats, AppError> {
        writeln!(self.output, "📄 Document Analyzer")?;
        writeln!(
            self.output,
            "Upload documents or paste text to extract insights and metadata"
        )?;

        let report = preflight::run_capability_checks(self.pipeline.extractor());
        if !report.all_passed {
            writeln!(self.output)?;
            writeln!(self.output, "⚠️ Optional features unavailable:")?;
            for check in report.missing() {
                writeln!(
                    self.output,
                    "  - {} ({})",
                    check.name,
                    check.details.as_deref().unwrap_or(&check.message)
                )?;
            }
        }

        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Choose input method: [1] Upload file  [2] Paste text  [3] Try sample  [q] Quit"
            )?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };

            let step = match choice.trim().to_lowercase().as_str() {
                "1" | "upload" => self.upload()?,
                "2" | "paste" => self.paste()?,
                "3" | "sample" => self.sample()?,
                "q" | "quit" | "exit" => break,
                "" => Step::Skipped,
                other => {
                    writeln!(self.output, "Unknown option: {}", other)?;
                    Step::Skipped
                }
            };

            match step {
                Step::Analyzed(Ok(result), elapsed) => {
                    self.stats.analyses += 1;
                    writeln!(self.output)?;
                    display::render_analysis(&mut self.output, &result)?;
                    if !self.offer_export(&result, elapsed)? {
                        break;
                    }
                }
                Step::Analyzed(Err(e), _) => {
                    self.stats.failures += 1;
                    warn!("Analysis failed: {}", e);
                    writeln!(self.output, "⚠️ {}", e.user_message())?;
                }
                Step::Skipped => {}
                Step::Eof => break,
            }
        }

        info!(
            "Session ended: {} analyses, {} failures, {} exports",
            self.stats.analyses, self.stats.failures, self.stats.exports
        );
        writeln!(self.output, "Goodbye!")?;
        Ok(self.stats)
    }

    fn upload(&mut self) -> Result<Step, AppError> {
        writeln!(
            self.output,
            "Supported: {}",
            DocumentFormat::supported_extensions().join(", ")
        )?;
        let Some(path) = self.prompt("File path: ")? else {
            return Ok(Step::Eof);
        };
        let path = path.trim().trim_matches(['"', '\'']);
        if path.is_empty() {
            writeln!(self.output, "No file chosen.")?;
            return Ok(Step::Skipped);
        }

        writeln!(self.output, "🔍 Analyzing document...")?;
        Ok(Step::timed(|| self.pipeline.analyze_path(Path::new(path))))
    }

    fn paste(&mut self) -> Result<Step, AppError> {
        let message = format!("Document name (optional) [{}]: ", DEFAULT_PASTE_NAME);
        let Some(name) = self.prompt(&message)? else {
            return Ok(Step::Eof);
        };
        let name = match name.trim() {
            "" => DEFAULT_PASTE_NAME.to_string(),
            n => n.to_string(),
        };

        writeln!(
            self.output,
            "Paste your text, then finish with a line containing only '{}':",
            PASTE_END
        )?;
        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim() == PASTE_END {
                break;
            }
            lines.push(line.to_string());
        }

        writeln!(self.output, "🔍 Analyzing document...")?;
        let text = lines.join("\n");
        Ok(Step::timed(|| self.pipeline.analyze_text(&name, &text)))
    }

    fn sample(&mut self) -> Result<Step, AppError> {
        for (i, sample) in Sample::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, sample.title())?;
        }
        let Some(choice) = self.prompt("Choose a sample: ")? else {
            return Ok(Step::Eof);
        };

        let sample = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Sample::ALL.get(i).copied());
        let Some(sample) = sample else {
            writeln!(self.output, "Unknown sample: {}", choice.trim())?;
            return Ok(Step::Skipped);
        };

        writeln!(self.output, "Sample text:\n{}", sample.text())?;
        writeln!(self.output, "🔍 Analyzing document...")?;
        Ok(Step::timed(|| {
            self.pipeline.analyze_text(&sample.filename(), sample.text())
        }))
    }

    /// Ask whether to export; returns `false` when the input ran out.
    fn offer_export(
        &mut self,
        result: &AnalysisResult,
        processing_time: Duration,
    ) -> Result<bool, AppError> {
        let Some(answer) = self.prompt("💾 Export results (JSON + text)? [y/N]: ")? else {
            return Ok(false);
        };
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            return Ok(true);
        }

        match export::write_exports(result, &self.export_dir, &ReportMeta::now(processing_time)) {
            Ok(paths) => {
                self.stats.exports += 1;
                writeln!(self.output, "📄 {}", paths.json.display())?;
                writeln!(self.output, "📝 {}", paths.text.display())?;
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                writeln!(self.output, "⚠️ Export failed: {}", e.user_message())?;
            }
        }
        Ok(true)
    }
}
