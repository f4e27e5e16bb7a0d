use bharatvox::{analyze, cli, client, config, error, output};
use bharatvox_common::{Language, VerdictView};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use dialoguer::Select;
use error::{BharatVoxError, Result};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "bharatvox=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 言語の決定: フラグ > 設定ファイル > 対話選択
fn resolve_language(flag: Option<Language>, config: &Config) -> Result<Language> {
    if let Some(language) = flag {
        return Ok(language);
    }
    if let Some(language) = config.resolve_default_language()? {
        return Ok(language);
    }
    if !std::io::stdin().is_terminal() {
        return Err(BharatVoxError::MissingLanguage);
    }

    let names: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
    let index = Select::new()
        .with_prompt("Language")
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| BharatVoxError::Prompt(e.to_string()))?;
    Ok(Language::ALL[index])
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // エラーはDisplayの文言（ユーザー向けメッセージ）で表示する
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { file, language, api_key, base_url, json } => {
            let api_key = config.resolve_api_key(api_key)?;
            let language = resolve_language(language, &config)?;
            let client = client::VoiceClient::new(config.resolve_base_url(base_url));

            if !json {
                println!("🎙 bharatvox - voice detection\n");
                println!("  File:     {}", file.display());
                println!("  Language: {}", language);
                println!("  API:      {}\n", client.base_url());
            }

            let verdict = analyze::analyze_file(
                &client,
                analyze::AnalyzeRequest {
                    path: &file,
                    language,
                    api_key: &api_key,
                    show_spinner: !json && std::io::stdout().is_terminal(),
                },
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                println!("{}", output::render_verdict(&VerdictView::from(&verdict)));
            }
        }

        Commands::Health { base_url } => {
            let client = client::VoiceClient::new(config.resolve_base_url(base_url));
            let health = client.health().await?;
            let service = health.service.as_deref().unwrap_or("unknown service");
            let version = health.version.as_deref().unwrap_or("-");
            if health.is_healthy() {
                println!("✔ {} ({}) at {} is {}", service, version, client.base_url(), health.status);
            } else {
                println!("⚠ {} at {} reported '{}'", service, client.base_url(), health.status);
            }
        }

        Commands::Config { show } => {
            if show {
                println!("Config: {}", Config::config_path()?.display());
                println!("  base_url: {}", config.base_url);
                println!(
                    "  api_key: {}",
                    if config.api_key.is_some() { "set" } else { "not set" }
                );
                println!(
                    "  default_language: {}",
                    config.default_language.as_deref().unwrap_or("not set")
                );
            } else {
                println!("Use --show to print the current config");
            }
        }
    }

    Ok(())
}
