//! 路線表のキャッシュ
//!
//! データソースごとに一度だけ読み込み、ソースが変わったとき
//! または明示的に `reload` したときだけ読み直す。

use crate::config::Config;
use crate::error::Result;
use crate::source::{load_routes, DataSource};
use minibus_finder_common::Route;
use tracing::{debug, info};

/// 読み込み済みの路線表
#[derive(Debug, Default)]
pub struct RouteStore {
    source: Option<DataSource>,
    routes: Vec<Route>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既に読み込んだ路線表で初期化
    pub fn with_routes(source: DataSource, routes: Vec<Route>) -> Self {
        Self {
            source: Some(source),
            routes,
        }
    }

    /// 現在のデータソース
    pub fn source(&self) -> Option<&DataSource> {
        self.source.as_ref()
    }

    /// 読み込み済みか
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// 路線表を取得（同じソースならキャッシュを返す）
    pub async fn get(&mut self, source: &DataSource, config: &Config) -> Result<&[Route]> {
        if self.source.as_ref() == Some(source) {
            debug!("キャッシュ済みの路線表を使用: {}", source);
        } else {
            self.reload(source, config).await?;
        }
        Ok(&self.routes)
    }

    /// 路線表を読み直す
    ///
    /// 読み込みに失敗した場合は以前の路線表を保持する。
    pub async fn reload(&mut self, source: &DataSource, config: &Config) -> Result<&[Route]> {
        let routes = load_routes(source, config).await?;
        info!("路線表を更新: {} ({}件)", source, routes.len());
        self.source = Some(source.clone());
        self.routes = routes;
        Ok(&self.routes)
    }

    /// キャッシュを破棄（次回の `get` で読み直す）
    pub fn invalidate(&mut self) {
        self.source = None;
        self.routes.clear();
    }
}
