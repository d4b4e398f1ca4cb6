use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use dashaway_analysis::{AnalysisSession, HttpBackend};
use dashaway_cli::{config, output, replace};
use dashaway_editor::SegmentEditor;
use dashaway_export::styles::DocumentStyles;
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dashaway", version, about = "Flag em-dashes, clichés, jargon and AI tells")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send text to the analysis API and show the flagged segments.
    Analyze(AnalyzeArgs),
    /// Inspect or change the saved configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// File to analyse, or `-` for stdin.
    input: PathBuf,

    /// Replace every segment of a kind, e.g. `em_dash=,`. Repeatable.
    #[arg(long = "replace-all", value_name = "KIND=TEXT")]
    replace_all: Vec<String>,

    /// Do not highlight segments of this kind. Repeatable.
    #[arg(long, value_name = "KIND")]
    hide: Vec<String>,

    /// Write the cleaned text to a `.txt` or `.docx` file.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Override the configured API base URL.
    #[arg(long)]
    api_base: Option<String>,

    /// Print render units as JSON instead of inline markup.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    SetApiBase { url: String },
    SetToken { token: String },
    ClearToken,
    /// Delete the saved config file.
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Command::Analyze(args) => analyze(args).await,
        Command::Config(command) => configure(command),
    }
}

async fn analyze(args: AnalyzeArgs) -> Result<()> {
    let mut config = config::load_or_default()?;
    config::apply_env_overrides(&mut config);
    if let Some(api_base) = args.api_base {
        config.api_base = api_base;
    }

    let replacements = args
        .replace_all
        .iter()
        .map(|arg| replace::parse_replace_all(arg))
        .collect::<Result<Vec<_>>>()?;

    let hidden = args
        .hide
        .iter()
        .map(|name| replace::parse_kind(name))
        .collect::<Result<Vec<_>>>()?;

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        return Err(eyre::eyre!("nothing to analyse: input is empty"));
    }

    let backend = HttpBackend::new(&config.api_base)?;
    let token = config.access_token.clone();
    let mut session = AnalysisSession::new(backend, move || token.clone())
        .with_timeout(Duration::from_secs(config.timeout_secs));

    session.analyze(text).await?;
    let state = session.state();

    if state.upgrade_required {
        return Err(eyre::eyre!(
            "usage limit reached: upgrade your plan or sign in to keep cleaning text"
        ));
    }
    if let Some(error) = state.error {
        return Err(eyre::eyre!(error));
    }

    let mut editor = SegmentEditor::with_history_capacity(config.history_capacity);
    editor.load(state.segments, state.readability_score);
    for kind in hidden {
        editor.toggle_visibility(kind);
    }
    for (category, text) in &replacements {
        let replaced = editor.replace_all(Some(category), text)?;
        tracing::info!(%category, replaced, "applied bulk replacement");
    }

    let units = editor.render();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&units)?);
    } else {
        println!("{}", output::format_units(&units));
        println!();
        print!("{}", output::format_stats(&editor.stats()));
    }

    if let Some(path) = args.export {
        dashaway_export::write_export(&path, editor.segments(), &DocumentStyles::default())?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

fn configure(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let mut config = config::load_or_default()?;
            config::apply_env_overrides(&mut config);
            let info = config::config_info(&config);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        ConfigCommand::SetApiBase { url } => {
            let mut config = config::load_or_default()?;
            config.api_base = url;
            config::save_config(&config)?;
        }
        ConfigCommand::SetToken { token } => {
            let mut config = config::load_or_default()?;
            config.access_token = Some(token);
            config::save_config(&config)?;
        }
        ConfigCommand::ClearToken => {
            let mut config = config::load_or_default()?;
            config.access_token = None;
            config::save_config(&config)?;
        }
        ConfigCommand::Reset => config::delete_config()?,
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))
}
