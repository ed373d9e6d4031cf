//! 対話式の内容ファイル作成
//!
//! 組み込みの内容をひな形にして、本人情報と連絡先だけ入力してもらう。
//! プロジェクトとスキルはひな形のまま出力し、JSONを直接編集する前提。

use crate::error::Result;
use dialoguer::{Confirm, Input};
use portfolio_common::{defaults, PortfolioContent, SocialKind, SocialLink};
use std::path::Path;

/// 入力された本人情報
#[derive(Debug, Clone, Default)]
pub struct InitAnswers {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

/// 名前の最初の語（ヒーロー見出し用）
fn first_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or_default().to_string()
}

/// 回答をひな形に反映
pub fn apply_answers(mut content: PortfolioContent, answers: &InitAnswers) -> PortfolioContent {
    let previous_name = content.profile.name.clone();
    // 空欄ならひな形の名前を残す
    let name = match answers.name.trim() {
        "" => previous_name.as_str(),
        name => name,
    };

    content.profile.name = name.to_string();
    content.profile.first_name = first_name(name);
    content.profile.tagline = answers.tagline.trim().to_string();
    content.metadata.title = format!("{} - Portfolio", name);
    content.metadata.authors = vec![name.to_string()];
    content.metadata.open_graph.title = content.metadata.title.clone();
    if !previous_name.is_empty() {
        content.metadata.description = content.metadata.description.replace(&previous_name, name);
    }
    content.resume.title = format!("{} - Resume", name);
    content.contact.email = answers.email.trim().to_string();
    content.contact.location = answers.location.trim().to_string();

    content.contact.socials = [
        (SocialKind::LinkedIn, &answers.linkedin),
        (SocialKind::GitHub, &answers.github),
    ]
    .into_iter()
    .filter(|(_, url)| !url.trim().is_empty())
    .map(|(kind, url)| SocialLink { kind, url: url.trim().to_string() })
    .collect();

    content
}

fn ask(prompt: &str, default: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn social_url(template: &PortfolioContent, kind: SocialKind) -> String {
    template.social(kind).map(|s| s.url.clone()).unwrap_or_default()
}

/// 対話式で内容ファイルを作成
pub fn run_interactive_init(output_path: &Path) -> Result<()> {
    if output_path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} は既に存在します。上書きしますか？", output_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("中止しました");
            return Ok(());
        }
    }

    let template = defaults::portfolio();
    let answers = InitAnswers {
        name: ask("名前", &template.profile.name)?,
        tagline: ask("キャッチコピー", &template.profile.tagline)?,
        email: ask("メールアドレス", &template.contact.email)?,
        location: ask("所在地", &template.contact.location)?,
        github: ask("GitHub URL", &social_url(&template, SocialKind::GitHub))?,
        linkedin: ask("LinkedIn URL", &social_url(&template, SocialKind::LinkedIn))?,
    };

    let content = apply_answers(template, &answers);
    crate::content::save(&content, output_path)?;
    println!("✔ 内容ファイルを作成: {}", output_path.display());
    println!("  プロジェクトとスキルはファイルを直接編集してください");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> InitAnswers {
        InitAnswers {
            name: "Ada Lovelace".into(),
            tagline: "Analytical engines".into(),
            email: "ada@example.com".into(),
            location: "London".into(),
            github: "https://github.com/ada".into(),
            linkedin: "".into(),
        }
    }

    #[test]
    fn test_apply_answers_profile() {
        let content = apply_answers(defaults::portfolio(), &answers());
        assert_eq!(content.profile.name, "Ada Lovelace");
        assert_eq!(content.profile.first_name, "Ada");
        assert_eq!(content.metadata.authors, vec!["Ada Lovelace".to_string()]);
        assert!(content.metadata.description.contains("Ada Lovelace"));
        assert!(!content.metadata.description.contains("Bereket"));
    }

    #[test]
    fn test_empty_social_dropped() {
        let content = apply_answers(defaults::portfolio(), &answers());
        assert_eq!(content.contact.socials.len(), 1);
        assert_eq!(content.contact.socials[0].kind, SocialKind::GitHub);
    }

    #[test]
    fn test_projects_and_skills_kept() {
        let content = apply_answers(defaults::portfolio(), &answers());
        assert_eq!(content.projects, defaults::projects());
        assert_eq!(content.skills, defaults::skills());
    }

    #[test]
    fn test_empty_name_keeps_template() {
        let template = defaults::portfolio();
        let blank = InitAnswers { name: "   ".into(), ..answers() };
        let content = apply_answers(defaults::portfolio(), &blank);
        assert_eq!(content.profile.name, template.profile.name);
        assert_eq!(content.metadata.title, format!("{} - Portfolio", template.profile.name));
        assert_eq!(content.metadata.description, template.metadata.description);
    }

    #[test]
    fn test_first_name_empty() {
        assert_eq!(first_name("   "), "");
    }
}
