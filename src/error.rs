use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinibusError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力が不足しています: {0}")]
    MissingInput(String),

    #[error("データソースが見つかりません: {0}")]
    SourceNotFound(String),

    #[error("データ取得エラー: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("データ取得に失敗 (HTTP {status}): {url}")]
    FetchStatus { status: u16, url: String },

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("必須の列がありません: {0}")]
    MissingColumn(String),

    #[error("データソースが空です: {0}")]
    EmptyTable(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("対話入力エラー: {0}")]
    Dialog(String),

    #[error(transparent)]
    Common(#[from] minibus_finder_common::Error),
}

pub type Result<T> = std::result::Result<T, MinibusError>;
