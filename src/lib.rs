//! Minibus Finder
//!
//! 路線表の読み込み・キャッシュ・CLI表示

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod render;
pub mod source;
pub mod store;
