use chrono::Datelike;
use clap::Parser;
use portfolio::{check, cli, config, content, error, init, logging, render};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Render { content: content_path, output, assets, theme } => {
            println!("🖨  portfolio - 事前レンダリング\n");

            // 1. 内容読み込み
            println!("[1/3] 内容を読み込み中...");
            let content = content::load(content_path.as_deref())?;
            println!(
                "✔ プロジェクト{}件 / スキル{}件\n",
                content.projects.len(),
                content.skills.len()
            );

            // 2. レンダリング
            println!("[2/3] index.html を生成中...");
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let assets_dir = assets.or_else(|| config.assets_dir.clone());
            let options = render::RenderOptions {
                theme: theme.unwrap_or(config.default_theme),
                site_url: config.site_url().map(str::to_string),
                year: chrono::Local::now().year(),
                wasm_module: config.wasm_module.clone(),
            };
            let report = render::render_site(&content, &output_dir, assets_dir.as_deref(), &options)?;
            if !report.warnings.is_empty() {
                println!("⚠ 警告{}件（詳細はログ出力）", report.warnings.len());
            }
            println!("✔ {}", report.index_path.display());
            println!("✔ {}\n", report.content_path.display());

            // 3. 静的ファイル
            println!("[3/3] 静的ファイル...");
            match assets_dir {
                Some(dir) => println!("✔ {}件をコピー ({})", report.asset_count, dir.display()),
                None => println!("- assets未指定のためスキップ"),
            }

            println!("\n✅ 完了: {}", output_dir.display());
        }

        Commands::Content { output } => {
            let content = portfolio_common::defaults::portfolio();
            match output {
                Some(path) => {
                    content::save(&content, &path)?;
                    println!("✔ 内容を保存: {}", path.display());
                }
                None => println!("{}", content.to_json_pretty()?),
            }
        }

        Commands::Check { input } => {
            let content = content::load_file(&input)?;
            let issues = check::validate(&content);

            if issues.is_empty() {
                println!("✓ 問題はありません: {}", input.display());
                return Ok(());
            }

            for issue in &issues {
                println!("{}", issue);
            }

            let errors = check::errors(&issues);
            if !errors.is_empty() {
                return Err(error::PortfolioError::InvalidContent(errors));
            }
            println!("\n✓ 警告{}件（エラーなし）", issues.len());
        }

        Commands::Init { output } => {
            println!("📝 portfolio - 内容ファイル作成\n");
            init::run_interactive_init(&output)?;
        }

        Commands::Config { show, set_output_dir, set_site_url, set_theme } => {
            // 環境変数の上書きを保存しないよう、ファイルから読み直す
            let mut config = Config::load_from(&Config::config_path()?)?;
            let mut changed = false;

            if let Some(dir) = set_output_dir {
                config.output_dir = dir;
                changed = true;
            }
            if let Some(url) = set_site_url {
                config.site_url = Some(url).filter(|u| !u.trim().is_empty());
                changed = true;
            }
            if let Some(theme) = set_theme {
                config.default_theme = theme;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  出力ディレクトリ: {}", config.output_dir.display());
                println!("  サイトURL: {}", config.site_url().unwrap_or("未設定"));
                println!("  既定テーマ: {}", config.default_theme);
                println!(
                    "  assets: {}",
                    config
                        .assets_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  WASMモジュール: {}", config.wasm_module.as_deref().unwrap_or("なし"));
            }
        }
    }

    Ok(())
}
