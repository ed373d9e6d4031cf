//! 内容JSONファイルの読み書き

use crate::error::{PortfolioError, Result};
use portfolio_common::{defaults, PortfolioContent};
use std::path::Path;

/// 内容ファイルを読み込み（パス省略時は組み込みの内容）
pub fn load(path: Option<&Path>) -> Result<PortfolioContent> {
    match path {
        Some(path) => load_file(path),
        None => {
            tracing::debug!("組み込みの内容を使用");
            Ok(defaults::portfolio())
        }
    }
}

pub fn load_file(path: &Path) -> Result<PortfolioContent> {
    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    let content = PortfolioContent::from_json(&json)?;
    tracing::debug!(
        path = %path.display(),
        projects = content.projects.len(),
        skills = content.skills.len(),
        "内容ファイルを読み込みました"
    );
    Ok(content)
}

pub fn save(content: &PortfolioContent, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content.to_json_pretty()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_none_is_defaults() {
        let content = load(None).unwrap();
        assert_eq!(content, defaults::portfolio());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/content.json"))).unwrap_err();
        assert!(matches!(err, PortfolioError::FileNotFound(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, PortfolioError::Common(portfolio_common::Error::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("content.json");
        let mut content = defaults::portfolio();
        content.skills.truncate(2);
        save(&content, &path).unwrap();
        assert_eq!(load_file(&path).unwrap().skills.len(), 2);
    }
}
