//! 内容ファイルの検証
//!
//! エラーがあると `render` は中断する。警告は表示のみ。

use lazy_static::lazy_static;
use portfolio_common::PortfolioContent;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref URL_RE: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// 問題の場所（例: "skills[2].level"）
    pub path: String,
    pub message: String,
}

impl Issue {
    fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, path: path.into(), message: message.into() }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, path: path.into(), message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "警告",
            Severity::Error => "エラー",
        };
        write!(f, "[{}] {}: {}", label, self.path, self.message)
    }
}

fn is_url(s: &str) -> bool {
    URL_RE.is_match(s.trim())
}

/// 内容を検証して問題の一覧を返す
pub fn validate(content: &PortfolioContent) -> Vec<Issue> {
    let mut issues = Vec::new();

    if content.metadata.title.trim().is_empty() {
        issues.push(Issue::error("metadata.title", "タイトルが空です"));
    }
    if content.metadata.description.trim().is_empty() {
        issues.push(Issue::warning("metadata.description", "説明文が空です（検索結果に表示されません）"));
    }
    if content.profile.name.trim().is_empty() {
        issues.push(Issue::error("profile.name", "名前が空です"));
    }

    let mut seen = HashSet::new();
    for (i, skill) in content.skills.iter().enumerate() {
        let path = format!("skills[{}]", i);
        if skill.name.trim().is_empty() {
            issues.push(Issue::error(format!("{}.name", path), "スキル名が空です"));
        } else if !seen.insert(skill.name.trim().to_lowercase()) {
            issues.push(Issue::warning(format!("{}.name", path), format!("スキル名が重複しています: {}", skill.name)));
        }
        if skill.level > 100 {
            issues.push(Issue::error(
                format!("{}.level", path),
                format!("習熟度は0-100で指定してください: {}", skill.level),
            ));
        }
    }

    for (i, project) in content.projects.iter().enumerate() {
        let path = format!("projects[{}]", i);
        if project.title.trim().is_empty() {
            issues.push(Issue::error(format!("{}.title", path), "タイトルが空です"));
        }
        if project.image.trim().is_empty() {
            issues.push(Issue::warning(
                format!("{}.image", path),
                format!("画像が未設定です（{} を使用）", project.image_src()),
            ));
        }
        for (field, url) in [("github", &project.github), ("demo", &project.demo)] {
            if !is_url(url) {
                issues.push(Issue::error(
                    format!("{}.{}", path, field),
                    format!("http(s)のURLではありません: {:?}", url),
                ));
            }
        }
        if project.tech.iter().any(|t| t.trim().is_empty()) {
            issues.push(Issue::warning(format!("{}.tech", path), "空のタグがあります"));
        }
    }

    let contact = &content.contact;
    if !contact.email.is_empty() && !EMAIL_RE.is_match(contact.email.trim()) {
        issues.push(Issue::error(
            "contact.email",
            format!("メールアドレスの形式が不正です: {}", contact.email),
        ));
    }
    for (i, link) in contact.socials.iter().enumerate() {
        if !is_url(&link.url) {
            issues.push(Issue::error(
                format!("contact.socials[{}].url", i),
                format!("{} のURLが不正です: {:?}", link.kind.label(), link.url),
            ));
        }
    }

    issues
}

/// エラーのみを文字列で返す
pub fn errors(issues: &[Issue]) -> Vec<String> {
    issues.iter().filter(|i| i.is_error()).map(|i| i.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::{defaults, Project, Skill};

    #[test]
    fn test_defaults_have_no_errors() {
        let issues = validate(&defaults::portfolio());
        assert!(errors(&issues).is_empty(), "{:?}", issues);
    }

    #[test]
    fn test_skill_level_over_100() {
        let mut content = defaults::portfolio();
        content.skills.push(Skill::new("Haskell", 150));
        let issues = validate(&content);
        assert!(issues.iter().any(|i| i.is_error() && i.path == "skills[8].level"));
    }

    #[test]
    fn test_duplicate_skill_is_warning() {
        let mut content = defaults::portfolio();
        content.skills.push(Skill::new("react", 50));
        let issues = validate(&content);
        let dup: Vec<_> = issues.iter().filter(|i| i.path == "skills[8].name").collect();
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].severity, Severity::Warning);
    }

    #[test]
    fn test_project_bad_urls() {
        let mut content = defaults::portfolio();
        content.projects.push(Project {
            title: "Broken".into(),
            image: "/img.png".into(),
            github: "github.com/x".into(),
            demo: "ftp://demo".into(),
            ..Default::default()
        });
        let errs = errors(&validate(&content));
        assert_eq!(errs.len(), 2);
        assert!(errs[0].contains("projects[3].github"));
        assert!(errs[1].contains("projects[3].demo"));
    }

    #[test]
    fn test_missing_image_is_warning_only() {
        let mut content = defaults::portfolio();
        content.projects[0].image.clear();
        let issues = validate(&content);
        assert!(errors(&issues).is_empty());
        assert!(issues.iter().any(|i| i.path == "projects[0].image"));
    }

    #[test]
    fn test_bad_email() {
        let mut content = defaults::portfolio();
        content.contact.email = "not-an-email".into();
        let errs = errors(&validate(&content));
        assert_eq!(errs.len(), 1);
        assert!(errs[0].contains("contact.email"));
    }

    #[test]
    fn test_empty_email_allowed() {
        let mut content = defaults::portfolio();
        content.contact.email.clear();
        assert!(errors(&validate(&content)).is_empty());
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::error("skills[0].name", "スキル名が空です");
        assert_eq!(issue.to_string(), "[エラー] skills[0].name: スキル名が空です");
    }
}
