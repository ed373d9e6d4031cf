use crate::error::{PortfolioError, Result};
use portfolio_common::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// サイトURLを上書きする環境変数
pub const SITE_URL_ENV: &str = "PORTFOLIO_SITE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub site_url: Option<String>,
    pub default_theme: Theme,
    pub assets_dir: Option<PathBuf>,
    /// index.html から読み込むWASMモジュール（nullで静的ページのみ）
    pub wasm_module: Option<String>,
}

/// `wasm-bindgen --target web` が出力するモジュール名
pub const DEFAULT_WASM_MODULE: &str = "portfolio_wasm.js";

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            site_url: None,
            default_theme: Theme::Light,
            assets_dir: None,
            wasm_module: Some(DEFAULT_WASM_MODULE.into()),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_overrides())
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "設定ファイルを読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }

    fn with_env_overrides(mut self) -> Self {
        // 環境変数を優先
        if let Ok(url) = std::env::var(SITE_URL_ENV) {
            if !url.trim().is_empty() {
                self.site_url = Some(url);
            }
        }
        self
    }

    /// 末尾のスラッシュを除いたサイトURL
    pub fn site_url(&self) -> Option<&str> {
        self.site_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.default_theme, Theme::Light);
        assert!(config.site_url.is_none());
        assert_eq!(config.wasm_module.as_deref(), Some(DEFAULT_WASM_MODULE));
    }

    #[test]
    fn test_wasm_module_disabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"wasm_module":null}"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.wasm_module.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            site_url: Some("https://example.com/".into()),
            default_theme: Theme::Dark,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_theme, Theme::Dark);
        assert_eq!(loaded.site_url(), Some("https://example.com"));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_theme":"dark"}"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_theme, Theme::Dark);
        assert_eq!(loaded.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_empty_site_url_ignored() {
        let config = Config {
            site_url: Some("/".into()),
            ..Default::default()
        };
        assert_eq!(config.site_url(), None);
    }
}
