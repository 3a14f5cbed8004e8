use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minibus")]
#[command(about = "最寄りのミニバス停留所検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 出発地から目的地へ向かう路線の最寄り停留所を検索
    Search {
        /// 出発地（地名または座標）
        #[arg(short, long, required = true)]
        origin: String,

        /// 目的地（部分一致）
        #[arg(short, long, required = true)]
        destination: String,

        /// 最大表示件数（1〜15、省略時は設定値）
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=15))]
        max_results: Option<u8>,

        /// データソース（URLまたはファイルパス）
        #[arg(short, long)]
        source: Option<String>,

        /// 出力形式 (table/json/dispatch)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// 結果をExcelファイルにも保存
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// 対話的に検索
    Interactive {
        /// データソース（URLまたはファイルパス）
        #[arg(short, long)]
        source: Option<String>,
    },

    /// 読み込んだ路線の一覧
    Routes {
        /// データソース（URLまたはファイルパス）
        #[arg(short, long)]
        source: Option<String>,

        /// 目的地で絞り込み（部分一致）
        #[arg(short, long)]
        destination: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// データソースを設定
        #[arg(long)]
        set_source: Option<String>,

        /// 最大表示件数を設定
        #[arg(long)]
        set_max_results: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Dispatch,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "t" => Ok(OutputFormat::Table),
            "json" | "j" => Ok(OutputFormat::Json),
            "dispatch" | "text" | "d" => Ok(OutputFormat::Dispatch),
            _ => Err(format!("Unknown format: {}. Use table, json, or dispatch", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Dispatch => write!(f, "dispatch"),
        }
    }
}
