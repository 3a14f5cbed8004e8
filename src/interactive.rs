//! 対話式検索モジュール
//!
//! 出発地と目的地を繰り返し入力して検索する。データソースの切り替え・
//! 再読み込み・表示件数の変更もこのループから行える。

use crate::config::{Config, MAX_RESULTS_LIMIT};
use crate::error::{MinibusError, Result};
use crate::render::render_table;
use crate::source::DataSource;
use crate::store::RouteStore;
use dialoguer::Input;
use minibus_finder_common::{format_dispatch_message, search, Error as CoreError};
use tracing::warn;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveAction {
    /// 出発地を入力（続けて目的地を聞く）
    Origin(String),
    /// データソースを切り替え
    ChangeSource(String),
    /// 現在のデータソースを読み直す
    Reload,
    /// 表示件数を変更
    SetMaxResults(usize),
    /// 入力なし
    Empty,
    /// 不正なコマンド
    Invalid(String),
    /// 終了
    Quit,
}

/// 入力行をアクションに変換（`:` で始まる行はコマンド）
pub fn parse_action(input: &str) -> InteractiveAction {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return InteractiveAction::Empty;
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return InteractiveAction::Origin(trimmed.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "q" | "quit" => InteractiveAction::Quit,
        "r" | "reload" => InteractiveAction::Reload,
        "s" | "source" if !arg.is_empty() => InteractiveAction::ChangeSource(arg.to_string()),
        "s" | "source" => InteractiveAction::Invalid("データソースを指定してください".into()),
        "n" | "max" => match arg.parse::<usize>() {
            Ok(n) if (1..=MAX_RESULTS_LIMIT).contains(&n) => InteractiveAction::SetMaxResults(n),
            _ => InteractiveAction::Invalid(format!(
                "表示件数は1〜{}で指定してください",
                MAX_RESULTS_LIMIT
            )),
        },
        _ => InteractiveAction::Invalid(format!("不明なコマンド: :{}", name)),
    }
}

/// 対話式で検索
pub async fn run_interactive(source: DataSource, config: &Config) -> Result<()> {
    let mut store = RouteStore::new();
    let mut source = source;
    let mut max_results = config.max_results;

    let count = store.get(&source, config).await?.len();
    println!("✔ {}件の路線を読み込みました ({})", count, source);
    println!("---");
    println!("操作: 出発地を入力 [:s ソース]切替 [:r]再読込 [:n 件数]表示件数 [:q]終了");
    println!("---\n");

    loop {
        let input = prompt("出発地 (地名または座標)")?;

        match parse_action(&input) {
            InteractiveAction::Empty => continue,
            InteractiveAction::Quit => {
                println!("終了します");
                break;
            }
            InteractiveAction::Invalid(message) => {
                println!("⚠ {}\n", message);
            }
            InteractiveAction::SetMaxResults(n) => {
                max_results = n;
                println!("  → 表示件数: {}\n", n);
            }
            InteractiveAction::Reload => match store.reload(&source, config).await {
                Ok(routes) => println!("✔ 再読み込み: {}件\n", routes.len()),
                Err(e) => {
                    warn!("再読み込みに失敗: {}", e);
                    println!("⚠ 再読み込みに失敗しました: {}\n", e);
                }
            },
            InteractiveAction::ChangeSource(next) => {
                let next = DataSource::parse(&next);
                match store.get(&next, config).await {
                    Ok(routes) => {
                        println!("✔ {}件の路線を読み込みました ({})\n", routes.len(), next);
                        source = next;
                    }
                    Err(e) => {
                        warn!("データソースの切り替えに失敗: {}", e);
                        println!("⚠ 読み込みに失敗しました。以前のデータを使用します: {}\n", e);
                    }
                }
            }
            InteractiveAction::Origin(origin) => {
                let destination = prompt("目的地")?;
                let destination = destination.trim();
                if destination.is_empty() {
                    println!("⚠ 目的地を入力してください\n");
                    continue;
                }

                let routes = store.get(&source, config).await?;
                match search(routes, &origin, destination, max_results) {
                    Ok(results) => {
                        println!("\n{}\n", render_table(&results));
                        println!("{}\n", format_dispatch_message(&origin, destination, &results));
                    }
                    Err(CoreError::NoDestinationMatch(d)) => {
                        println!("⚠ 目的地 '{}' に向かう路線がありません\n", d);
                    }
                }
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| MinibusError::Dialog(e.to_string()))
}
