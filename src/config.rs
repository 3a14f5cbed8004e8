use crate::error::{MinibusError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 公開済みスプレッドシート（CSV出力）
pub const DEFAULT_SOURCE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQLymjfowXd0_rC_1or1-icSAgPgMY0kQCCrh2CS34-xN0OWAGH-Pqwnh9FJ61g57iPOVlsIo60Qr7s/pub?output=csv";

/// 表示件数の上限
pub const MAX_RESULTS_LIMIT: usize = 15;

/// データソースの列見出し
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub origin_name: String,
    pub origin_coordinates: String,
    pub destination_name: String,
    pub destination_coordinates: String,
    pub intermediate_stops: String,
    pub operating_days: String,
    /// 任意列（なければ空文字）
    pub observations: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            origin_name: "LOCALIDAD DE ORIGEN".into(),
            origin_coordinates: "COORDENADAS ORIGEN".into(),
            destination_name: "LOCALIDAD DE DESTINO".into(),
            destination_coordinates: "COORDENADAS DESTINO".into(),
            intermediate_stops: "PARADAS INTERMEDIAS".into(),
            operating_days: "DIAS OPERATIVOS".into(),
            observations: "OBSERVACIONES".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL（CSV公開）またはローカルファイルのパス
    pub source: String,
    pub max_results: usize,
    pub timeout_seconds: u64,
    pub columns: ColumnMapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            max_results: 7,
            timeout_seconds: 30,
            columns: ColumnMapping::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MinibusError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("minibus-finder").join("config.json"))
    }

    /// 使用するデータソース（環境変数を優先）
    pub fn effective_source(&self) -> String {
        match std::env::var("MINIBUS_SOURCE") {
            Ok(source) if !source.trim().is_empty() => source,
            _ => self.source.clone(),
        }
    }

    pub fn set_source(&mut self, source: String) -> Result<()> {
        if source.trim().is_empty() {
            return Err(MinibusError::Config("データソースが空です".into()));
        }
        self.source = source;
        self.save()
    }

    pub fn set_max_results(&mut self, max_results: usize) -> Result<()> {
        if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
            return Err(MinibusError::Config(format!(
                "表示件数は1〜{}で指定してください: {}",
                MAX_RESULTS_LIMIT, max_results
            )));
        }
        self.max_results = max_results;
        self.save()
    }
}
