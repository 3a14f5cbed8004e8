use clap::Parser;
use minibus_finder::{cli, config, error, export, interactive, render, source, store};
use minibus_finder_common::matcher::filter_by_destination;
use minibus_finder_common::{search, Error as CoreError};
use cli::{Cli, Commands};
use config::{Config, MAX_RESULTS_LIMIT};
use error::{MinibusError, Result};
use source::DataSource;
use store::RouteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// 必須入力の確認（空白のみも不可）
fn require_input<'a>(label: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MinibusError::MissingInput(label.to_string()));
    }
    Ok(trimmed)
}

fn resolve_source(source: Option<String>, config: &Config) -> DataSource {
    DataSource::parse(&source.unwrap_or_else(|| config.effective_source()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { origin, destination, max_results, source, format, xlsx } => {
            let origin = require_input("出発地", &origin)?;
            let destination = require_input("目的地", &destination)?;
            let max_results = max_results
                .map(usize::from)
                .unwrap_or(config.max_results)
                .clamp(1, MAX_RESULTS_LIMIT);

            let source = resolve_source(source, &config);
            let mut store = RouteStore::new();
            let routes = store.get(&source, &config).await?;

            let results = match search(routes, origin, destination, max_results) {
                Ok(results) => results,
                Err(CoreError::NoDestinationMatch(d)) => {
                    eprintln!("⚠ 目的地 '{}' に向かう路線がありません", d);
                    return Err(CoreError::NoDestinationMatch(d).into());
                }
            };

            println!("{}", render::render(format, origin, destination, &results)?);

            if let Some(path) = xlsx {
                export::export_results(&results, &path, destination)?;
            }
        }

        Commands::Interactive { source } => {
            println!("🚌 minibus-finder - 対話検索\n");
            let source = resolve_source(source, &config);
            interactive::run_interactive(source, &config).await?;
        }

        Commands::Routes { source, destination } => {
            let source = resolve_source(source, &config);
            let mut store = RouteStore::new();
            let routes = store.get(&source, &config).await?;

            let listed: Vec<_> = match destination.as_deref().map(str::trim) {
                Some(d) if !d.is_empty() => filter_by_destination(routes, d),
                _ => routes.iter().collect(),
            };

            println!("{}", render::render_routes(&listed));
            println!("\n{}件 / 全{}件", listed.len(), routes.len());
        }

        Commands::Config { set_source, set_max_results, show } => {
            let mut config = config;

            if let Some(source) = set_source {
                config.set_source(source)?;
                println!("✔ データソースを設定しました");
            }

            if let Some(n) = set_max_results {
                config.set_max_results(n)?;
                println!("✔ 表示件数を設定しました");
            }

            if show {
                println!("設定:");
                println!("  データソース: {}", config.source);
                let effective = config.effective_source();
                if effective != config.source {
                    println!("  使用中のソース (MINIBUS_SOURCE): {}", effective);
                }
                println!("  表示件数: {}", config.max_results);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  列見出し:");
                println!("    出発地: {}", config.columns.origin_name);
                println!("    出発地座標: {}", config.columns.origin_coordinates);
                println!("    目的地: {}", config.columns.destination_name);
                println!("    目的地座標: {}", config.columns.destination_coordinates);
                println!("    中間停留所: {}", config.columns.intermediate_stops);
                println!("    運行日: {}", config.columns.operating_days);
                println!("    備考: {}", config.columns.observations);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
