pub mod html;

pub use html::{escape, render_document, RenderOptions};

use crate::assets;
use crate::check;
use crate::error::{PortfolioError, Result};
use portfolio_common::PortfolioContent;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";
pub const CONTENT_FILE: &str = "content.json";

/// 出力結果
#[derive(Debug)]
pub struct RenderReport {
    pub index_path: PathBuf,
    pub content_path: PathBuf,
    /// コピーした静的ファイル数（assets未指定なら0）
    pub asset_count: usize,
    pub warnings: Vec<String>,
}

/// 事前レンダリングしたページ一式を出力
pub fn render_site(
    content: &PortfolioContent,
    output_dir: &Path,
    assets_dir: Option<&Path>,
    options: &RenderOptions,
) -> Result<RenderReport> {
    let issues = check::validate(content);
    let errors = check::errors(&issues);
    if !errors.is_empty() {
        return Err(PortfolioError::InvalidContent(errors));
    }
    let mut warnings: Vec<String> = issues
        .iter()
        .filter(|i| !i.is_error())
        .map(|i| i.to_string())
        .collect();

    std::fs::create_dir_all(output_dir)?;
    // 重なりがあれば何も書き出す前に止める
    if let Some(dir) = assets_dir {
        assets::check_dirs(dir, output_dir)?;
    }

    let index_path = output_dir.join(INDEX_FILE);
    let document = render_document(content, options);
    std::fs::write(&index_path, document)?;
    tracing::debug!(path = %index_path.display(), theme = %options.theme, "index.html を出力");

    // WASM側が起動時に読み込む
    let content_path = output_dir.join(CONTENT_FILE);
    crate::content::save(content, &content_path)?;

    let asset_count = match assets_dir {
        Some(dir) => {
            let manifest = assets::copy_assets(dir, output_dir, &[INDEX_FILE, CONTENT_FILE])?;
            warnings.extend(
                manifest
                    .skipped
                    .iter()
                    .map(|rel| {
                        check::Issue::warning(format!("assets/{}", rel), "生成ファイルと同名のためスキップ")
                            .to_string()
                    }),
            );
            manifest.entries.len()
        }
        None => 0,
    };

    for w in &warnings {
        tracing::warn!("{}", w);
    }

    Ok(RenderReport {
        index_path,
        content_path,
        asset_count,
        warnings,
    })
}
