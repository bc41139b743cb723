use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use content::{ContentSource, EmbeddedContent, YamlFileContent};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, SubmissionConfig, SubmissionService};
use survey_core::BASE_PREFIX;
use survey_core::model::Survey;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    survey: Arc<Survey>,
    submissions: Arc<SubmissionService>,
    media_base_path: String,
}

impl UiApp for DesktopApp {
    fn survey(&self) -> Arc<Survey> {
        Arc::clone(&self.survey)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    fn media_base_path(&self) -> String {
        self.media_base_path.clone()
    }
}

struct Args {
    content_path: Option<PathBuf>,
    base_path: String,
    endpoint: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content <yaml>] [--base-path <path>] [--endpoint <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content   built-in survey");
    eprintln!("  --base-path {BASE_PREFIX}/");
    eprintln!("  --endpoint  {}", services::DEFAULT_ENDPOINT_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SURVEY_CONTENT_PATH, SURVEY_BASE_PATH, SURVEY_ENDPOINT_URL, SURVEY_USER_AGENT, RUST_LOG");
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut content_path = non_empty_env("SURVEY_CONTENT_PATH").map(PathBuf::from);
        let mut base_path =
            non_empty_env("SURVEY_BASE_PATH").unwrap_or_else(|| format!("{BASE_PREFIX}/"));
        let mut endpoint = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => {
                    content_path = Some(PathBuf::from(require_value(args, "--content")?));
                }
                "--base-path" => base_path = require_value(args, "--base-path")?,
                "--endpoint" => endpoint = Some(require_value(args, "--endpoint")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            content_path,
            base_path,
            endpoint,
        })
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,services=debug,ui=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_survey(content_path: Option<PathBuf>) -> Result<Survey, content::ContentError> {
    let source: Box<dyn ContentSource> = match content_path {
        Some(path) => Box::new(YamlFileContent::new(path)),
        None => Box::new(EmbeddedContent),
    };
    source.load()
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let survey = load_survey(parsed.content_path)?;
    tracing::info!(scenarios = survey.len(), "survey content loaded");

    let config = SubmissionConfig::from_env(parsed.endpoint.as_deref())?;
    tracing::debug!(endpoint = %config.endpoint, "submission endpoint configured");

    let submissions = Arc::new(SubmissionService::from_config(
        Clock::default_clock(),
        &config,
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        survey: Arc::new(survey),
        submissions,
        media_base_path: parsed.base_path,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Encuesta Run Visualizer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "survey app failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
