mod settings;

use std::path::PathBuf;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::Parser;

use phrase_spotter_core::matching::domain::match_config::MatchConfig;
use phrase_spotter_core::matching::phrase_spotter::PhraseSpotter;
use phrase_spotter_core::pipeline::infrastructure::threaded_search_executor::ThreadedSearchExecutor;
use phrase_spotter_core::pipeline::search_audio_use_case::SearchAudioUseCase;
use phrase_spotter_core::pipeline::search_executor::{ProgressFn, SearchConfig};
use phrase_spotter_core::report::domain::report_writer::ReportWriter;
use phrase_spotter_core::report::infrastructure::csv_report_writer::CsvReportWriter;
use phrase_spotter_core::shared::audio_files::scan_audio_files;
use phrase_spotter_core::transcript::infrastructure::whisper_cli_transcriber::WhisperCliTranscriber;
use phrase_spotter_core::transcript::infrastructure::whisper_json_reader::WhisperJsonReader;

use settings::Settings;

/// Find a spoken phrase in audio files, tolerating transcription noise.
#[derive(Parser)]
#[command(name = "phrase-spotter")]
struct Cli {
    /// Audio file or directory (searched recursively).
    input: PathBuf,

    /// Phrase to look for.
    #[arg(long)]
    phrase: Option<String>,

    /// CSV report to write.
    #[arg(long, default_value = "hits.csv")]
    output: PathBuf,

    /// Maximum edit distance per word (0 = exact after stemming).
    #[arg(long, allow_negative_numbers = true)]
    max_distance: Option<i32>,

    /// Accept a literal occurrence of the phrase inside the text.
    #[arg(long)]
    allow_substring: Option<bool>,

    /// Number of consecutive transcript segments joined per window.
    #[arg(long)]
    window_size: Option<usize>,

    /// Audio files transcribed in parallel.
    #[arg(long)]
    jobs: Option<usize>,

    /// whisper.cpp command line binary.
    #[arg(long)]
    whisper_binary: Option<String>,

    /// Whisper ggml model file.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Spoken language passed to whisper.
    #[arg(long)]
    language: Option<String>,

    /// Settings file (JSON). Defaults to the per-user settings file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = apply_overrides(Settings::load(cli.config.as_deref())?, &cli);
    validate(&cli, &settings)?;

    let phrase = settings.phrase.as_deref().unwrap_or_default();
    let match_config = MatchConfig::new(
        phrase,
        settings.max_distance,
        settings.allow_substring,
        settings.window_size,
    )?;

    let inputs = scan_audio_files(&cli.input, &settings.extensions)?;
    if inputs.is_empty() {
        return Err(format!("No audio files found in {}", cli.input.display()).into());
    }
    log::info!(
        "Searching {} file(s) for \"{}\" with {} job(s)",
        inputs.len(),
        match_config.phrase(),
        settings.jobs
    );

    let model = settings
        .model_path
        .as_deref()
        .ok_or("A whisper model is required (--model or model_path in settings)")?;
    let transcriber = WhisperCliTranscriber::new(&settings.whisper_binary, model)?
        .with_language(&settings.language)
        .with_threads(threads_per_job(settings.jobs));

    let use_case = SearchAudioUseCase::new(
        Box::new(transcriber),
        PhraseSpotter::new(match_config, Box::new(WhisperJsonReader)),
        Box::new(ThreadedSearchExecutor::new(settings.jobs)),
    );

    let progress: ProgressFn = Box::new(|done, total| {
        eprint!("\rTranscribed {done}/{total}");
        true
    });
    let config = SearchConfig {
        on_progress: Some(progress),
        cancelled: Arc::new(AtomicBool::new(false)),
    };
    let summary = use_case.run(&inputs, &config);
    eprintln!();

    CsvReportWriter::new().write_report(&cli.output, &summary.hits)?;
    log::info!("Report written to {}", cli.output.display());

    println!(
        "{} hit(s) across {} file(s), {} failed",
        summary.hits.len(),
        summary.processed,
        summary.failures.len()
    );
    Ok(())
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(ref phrase) = cli.phrase {
        settings.phrase = Some(phrase.clone());
    }
    if let Some(d) = cli.max_distance {
        settings.max_distance = d;
    }
    if let Some(allow) = cli.allow_substring {
        settings.allow_substring = allow;
    }
    if let Some(w) = cli.window_size {
        settings.window_size = w;
    }
    if let Some(j) = cli.jobs {
        settings.jobs = j;
    }
    if let Some(ref binary) = cli.whisper_binary {
        settings.whisper_binary = binary.clone();
    }
    if let Some(ref model) = cli.model {
        settings.model_path = Some(model.clone());
    }
    if let Some(ref language) = cli.language {
        settings.language = language.clone();
    }
    settings
}

fn validate(cli: &Cli, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input not found: {}", cli.input.display()).into());
    }
    if settings.phrase.as_deref().map_or(true, |p| p.trim().is_empty()) {
        return Err("A phrase is required (--phrase or phrase in settings)".into());
    }
    if settings.jobs == 0 {
        return Err("Jobs must be at least 1".into());
    }
    if settings.extensions.is_empty() {
        return Err("At least one audio extension must be configured".into());
    }
    Ok(())
}

/// Split the machine's cores between concurrent whisper processes.
fn threads_per_job(jobs: usize) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cores / jobs.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("phrase-spotter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_overrides_settings() {
        let cli = parse(&[
            "audio",
            "--phrase",
            "hello world",
            "--max-distance",
            "2",
            "--allow-substring",
            "false",
            "--window-size",
            "5",
            "--jobs",
            "3",
            "--model",
            "m.bin",
        ]);
        let settings = apply_overrides(Settings::default(), &cli);
        assert_eq!(settings.phrase.as_deref(), Some("hello world"));
        assert_eq!(settings.max_distance, 2);
        assert!(!settings.allow_substring);
        assert_eq!(settings.window_size, 5);
        assert_eq!(settings.jobs, 3);
        assert_eq!(settings.model_path, Some(PathBuf::from("m.bin")));
    }

    #[test]
    fn test_settings_kept_without_flags() {
        let cli = parse(&["audio"]);
        let base = Settings {
            phrase: Some("from file".to_string()),
            max_distance: 0,
            ..Settings::default()
        };
        let settings = apply_overrides(base.clone(), &cli);
        assert_eq!(settings, base);
        assert_eq!(cli.output, PathBuf::from("hits.csv"));
    }

    #[test]
    fn test_negative_distance_flag_parses() {
        let cli = parse(&["audio", "--max-distance", "-1"]);
        assert_eq!(cli.max_distance, Some(-1));
    }

    #[test]
    fn test_validate_requires_phrase() {
        let cli = parse(&["."]);
        let err = validate(&cli, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("phrase is required"));
    }

    #[test]
    fn test_validate_missing_input() {
        let cli = parse(&["/nonexistent/audio", "--phrase", "x"]);
        let settings = apply_overrides(Settings::default(), &cli);
        assert!(validate(&cli, &settings).is_err());
    }

    #[test]
    fn test_threads_per_job_at_least_one() {
        assert!(threads_per_job(1) >= 1);
        assert_eq!(threads_per_job(usize::MAX), 1);
    }
}
