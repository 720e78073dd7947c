// Document Analyzer CLI entry point
// Extract -> Analyze -> Display/Export

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use docanalyzer::analysis::AnalysisResult;
use docanalyzer::export::ReportMeta;
use docanalyzer::interactive::InteractiveSession;
use docanalyzer::samples::Sample;
use docanalyzer::{
    display, export, logging, preflight, AnalyzerConfig, AppError, DocumentPipeline,
};

#[derive(Parser, Debug)]
#[command(
    name = "docanalyzer",
    version,
    about = "Upload documents or paste text to extract insights and metadata."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a PDF, DOCX, text or code file
    Analyze {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze pasted text (read from stdin when TEXT is omitted)
    Text {
        text: Option<String>,
        /// Document name used in reports
        #[arg(long, default_value = "pasted_text.txt")]
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze one of the built-in sample documents
    Sample {
        #[arg(value_enum)]
        sample: Sample,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the optional extraction backends available in this build
    Capabilities,
    /// Menu-driven session (default)
    Interactive {
        /// Directory for exported reports
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Print the JSON report instead of the formatted view
    #[arg(long)]
    json: bool,
    /// Also write analysis_<name>.json and summary_<name>.txt into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

/// Time one analysis and turn a failure into the message shown to users
fn analyze(
    run: impl FnOnce() -> Result<AnalysisResult, AppError>,
) -> Result<(AnalysisResult, ReportMeta)> {
    let start = Instant::now();
    let result = run().map_err(|e| anyhow::anyhow!(e.user_message()))?;
    Ok((result, ReportMeta::now(start.elapsed())))
}

fn emit(result: &AnalysisResult, meta: &ReportMeta, output: &OutputArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if output.json {
        writeln!(stdout, "{}", export::to_json(result, meta)?)?;
    } else {
        display::render_analysis(&mut stdout, result)?;
    }

    if let Some(dir) = &output.export_dir {
        let paths = export::write_exports(result, dir, meta)?;
        info!("Reports written to {}", dir.display());
        eprintln!("{}\n{}", paths.json.display(), paths.text.display());
    }
    Ok(())
}

fn run(cli: Cli, pipeline: &DocumentPipeline) -> Result<()> {
    match cli.command.unwrap_or(Commands::Interactive {
        export_dir: PathBuf::from("."),
    }) {
        Commands::Analyze { path, output } => {
            let (result, meta) = analyze(|| pipeline.analyze_path(&path))
                .with_context(|| format!("Could not analyze {}", path.display()))?;
            emit(&result, &meta, &output)
        }
        Commands::Text { text, name, output } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let (result, meta) = analyze(|| pipeline.analyze_text(&name, &text))?;
            emit(&result, &meta, &output)
        }
        Commands::Sample { sample, output } => {
            let (result, meta) =
                analyze(|| pipeline.analyze_text(&sample.filename(), sample.text()))?;
            emit(&result, &meta, &output)
        }
        Commands::Capabilities => {
            let report = preflight::run_capability_checks(pipeline.extractor());
            display::render_capabilities(&mut io::stdout().lock(), &report)?;
            Ok(())
        }
        Commands::Interactive { export_dir } => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            let mut session = InteractiveSession::new(pipeline, stdin, stdout, export_dir);
            session.run()?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, env_file) = AnalyzerConfig::load().context("Invalid configuration")?;
    logging::init(config.log_format)?;
    if let Some(path) = env_file {
        debug!("Loaded environment from {}", path.display());
    }
    info!("Starting Document Analyzer (log format: {})", config.log_format);

    let pipeline = DocumentPipeline::new(config);
    run(cli, &pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let err = run(cli, &DocumentPipeline::default()).unwrap_err();
        format!("{:#}", err)
    }

    #[test]
    fn test_text_failure_uses_user_message() {
        let message = failure(&["docanalyzer", "text", "   "]);
        assert_eq!(message, AppError::EmptyInput.user_message());
    }

    #[test]
    fn test_analyze_failure_uses_user_message() {
        let file = tempfile::Builder::new().suffix(".pptx").tempfile().unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let message = failure(&["docanalyzer", "analyze", &path]);
        assert!(message.starts_with(&format!("Could not analyze {}", path)));
        assert!(message.ends_with(&AppError::UnsupportedFormat("pptx".to_string()).user_message()));
    }

    #[test]
    fn test_analyze_wraps_every_failure_the_same_way() {
        let wrapped = analyze(|| Err(AppError::EmptyInput)).unwrap_err();
        assert_eq!(wrapped.to_string(), AppError::EmptyInput.user_message());

        let sample = Sample::BusinessReport;
        let (result, meta) =
            analyze(|| DocumentPipeline::default().analyze_text(&sample.filename(), sample.text()))
                .unwrap();
        assert_eq!(result.filename, "business_report.txt");
        assert!(meta.processing_time.as_secs() < 60);
    }
}
