//! ログ初期化
//!
//! 既定は info、`--verbose` で debug。`RUST_LOG` があればそちらを優先する。
//! 進捗表示は従来どおり標準出力へ、ログは標準エラーへ出す。

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portfolio={0},portfolio_common={0}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(verbose)
        .try_init();
}
