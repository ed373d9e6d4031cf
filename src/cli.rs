use clap::{Parser, Subcommand};
use portfolio_common::Theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオページの事前レンダリング・内容管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// index.html を事前レンダリング
    Render {
        /// 内容JSONファイル（省略時は組み込みの内容）
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// 出力ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 画像などの静的ファイルのディレクトリ
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// 初期テーマ (light/dark)
        #[arg(short, long)]
        theme: Option<Theme>,
    },

    /// 組み込みの内容をJSONで出力
    Content {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 内容JSONファイルを検証
    Check {
        /// 内容JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 対話的に内容JSONファイルを作成
    Init {
        /// 出力ファイル
        #[arg(short, long, default_value = "content.json")]
        output: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// サイトURLを設定（canonical / og:url に使用）
        #[arg(long)]
        set_site_url: Option<String>,

        /// 既定のテーマを設定 (light/dark)
        #[arg(long)]
        set_theme: Option<Theme>,
    },
}
