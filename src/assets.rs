//! 静的ファイル（画像・履歴書PDF等）のコピー
//!
//! assetsディレクトリ配下を出力先へそのままの相対パスでコピーし、
//! SHA-256付きの assets.json を書き出す。

use crate::error::{PortfolioError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const MANIFEST_FILE: &str = "assets.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    /// 出力ディレクトリからの相対パス（区切りは常に '/'）
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    pub entries: Vec<AssetEntry>,
    /// 生成ファイルと同名のためコピーしなかった相対パス
    #[serde(skip)]
    pub skipped: Vec<String>,
}

impl AssetManifest {
    pub fn find(&self, path: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}

/// ファイルのSHA-256（16進）
pub fn hash_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&data)))
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

/// 隠しファイルを除いたファイル一覧（相対パス順）
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PortfolioError::FolderNotFound(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    Ok(files)
}

fn relative_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// コピー元と出力先が重なっていないか確認
///
/// 同じディレクトリだと `fs::copy` が自分自身を切り詰めてしまう。
/// 出力先がassets配下にあると前回の出力まで再コピーされる。
pub fn check_dirs(assets_dir: &Path, output_dir: &Path) -> Result<()> {
    if !assets_dir.is_dir() {
        return Err(PortfolioError::FolderNotFound(assets_dir.display().to_string()));
    }
    let assets = assets_dir.canonicalize()?;
    let output = output_dir.canonicalize()?;

    if output.starts_with(&assets) {
        return Err(PortfolioError::Config(format!(
            "出力先 {} がassetsディレクトリ {} と同じか、その中にあります",
            output_dir.display(),
            assets_dir.display()
        )));
    }
    Ok(())
}

/// assetsディレクトリを出力先へコピーしマニフェストを書き出す
///
/// `reserved` に挙げた相対パスは生成ファイルを上書きしないようスキップする。
pub fn copy_assets(assets_dir: &Path, output_dir: &Path, reserved: &[&str]) -> Result<AssetManifest> {
    check_dirs(assets_dir, output_dir)?;
    let files = collect_files(assets_dir)?;
    tracing::debug!(dir = %assets_dir.display(), count = files.len(), "静的ファイルをコピー");

    let progress = ProgressBar::new(files.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}") {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let mut entries = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for source in &files {
        let rel = relative_path(assets_dir, source);
        progress.set_message(rel.clone());

        if rel == MANIFEST_FILE || reserved.contains(&rel.as_str()) {
            skipped.push(rel);
            progress.inc(1);
            continue;
        }

        let dest = output_dir.join(&rel);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = std::fs::copy(source, &dest)?;
        let sha256 = hash_file(&dest)?;
        entries.push(AssetEntry { path: rel, bytes, sha256 });
        progress.inc(1);
    }
    progress.finish_and_clear();

    let manifest = AssetManifest { entries, skipped };
    let manifest_path = output_dir.join(MANIFEST_FILE);
    std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    Ok(manifest)
}
