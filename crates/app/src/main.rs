use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuizConfig, QuizService, SourceConfig, parse_quiz_count};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "quiz", version, about = "Multiple-choice quiz desktop app")]
struct Cli {
    /// Question data file (overrides QUIZ_DATA_PATH)
    #[arg(long, global = true, conflicts_with = "url")]
    data: Option<PathBuf>,

    /// Question data URL (overrides QUIZ_DATA_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Questions per quiz (overrides QUIZ_COUNT)
    #[arg(long, global = true, value_parser = parse_count)]
    count: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch the desktop quiz (default)
    Ui,
    /// Load and validate the question data, then exit
    Check,
}

fn parse_count(raw: &str) -> Result<usize, String> {
    parse_quiz_count(raw).map_err(|err| err.to_string())
}

impl Cli {
    /// Layer command-line flags over the environment configuration.
    fn apply(&self, mut config: QuizConfig) -> QuizConfig {
        if let Some(url) = &self.url {
            config.source = SourceConfig::Url(url.clone());
        } else if let Some(path) = &self.data {
            config.source = SourceConfig::File(path.clone());
        }
        if let Some(count) = self.count {
            config.quiz_count = count;
        }
        config
    }
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn check(quiz_service: &QuizService) -> anyhow::Result<()> {
    let loaded = quiz_service
        .load_pool()
        .await
        .context("question data failed to load")?;
    println!(
        "{} questions, {} study notes; each quiz asks {}.",
        loaded.pool.len(),
        loaded.notes.len(),
        quiz_service.quiz_count().min(loaded.pool.len())
    );
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_config = QuizConfig::from_env().context("invalid quiz environment")?;
    let config = cli.apply(env_config);
    tracing::info!(source = ?config.source, quiz_count = config.quiz_count, "configured");

    let quiz_service =
        Arc::new(QuizService::new(config.build_source()).with_quiz_count(config.quiz_count));

    match cli.command.unwrap_or(Command::Ui) {
        Command::Check => check(&quiz_service).await,
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_service });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
