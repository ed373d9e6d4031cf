//! Portfolio CLI
//!
//! ポートフォリオページの事前レンダリングと内容ファイルの管理

pub mod assets;
pub mod check;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod init;
pub mod logging;
pub mod render;
