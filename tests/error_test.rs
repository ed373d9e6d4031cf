//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use portfolio::content;
use portfolio::error::PortfolioError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない内容ファイル
#[test]
fn test_load_nonexistent_content() {
    let result = content::load_file(Path::new("/nonexistent/path/content.json"));
    assert!(matches!(result.unwrap_err(), PortfolioError::FileNotFound(_)));
}

/// 空の内容ファイルはJSONエラー
#[test]
fn test_load_empty_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("content.json");
    std::fs::write(&path, "").unwrap();

    let err = content::load_file(&path).unwrap_err();
    assert!(matches!(err, PortfolioError::Common(portfolio_common::Error::Json(_))));
}

/// 空のオブジェクトは読み込めるが検証でエラー
#[test]
fn test_empty_object_fails_validation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("content.json");
    std::fs::write(&path, "{}").unwrap();

    let loaded = content::load_file(&path).expect("空オブジェクトの読み込み失敗");
    let errors = portfolio::check::errors(&portfolio::check::validate(&loaded));
    assert_eq!(errors.len(), 2); // metadata.title, profile.name
}

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("テスト設定エラー".to_string()),
        PortfolioError::FileNotFound("content.json".to_string()),
        PortfolioError::FolderNotFound("/path/to/assets".to_string()),
        PortfolioError::InvalidContent(vec!["[エラー] skills[0].name: スキル名が空です".to_string()]),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// InvalidContentは件数と各行を表示
#[test]
fn test_invalid_content_display() {
    let err = PortfolioError::InvalidContent(vec!["a".into(), "b".into()]);
    assert_eq!(format!("{}", err), "内容ファイルに2件のエラーがあります:\n  a\n  b");
}
