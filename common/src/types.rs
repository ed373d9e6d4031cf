//! ポートフォリオ内容の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Skill / Project: スキル一覧とプロジェクトギャラリー
//! - Profile / About / Resume / Contact: 各セクションの表示内容
//! - SiteMetadata: ドキュメントのtitle/description（検索エンジン向け）

use serde::{Deserialize, Serialize};

/// プロジェクト画像が未設定の場合に使う画像
pub const FALLBACK_IMAGE: &str = "/images/photo.jpg";

/// スキル（プログレスバーとして表示）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// 習熟度（0-100のパーセント）
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self { name: name.into(), level }
    }

    /// プログレスバーのstyle属性
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level)
    }
}

/// プロジェクト（カードとして表示）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub github: String,
    pub demo: String,
}

impl Project {
    /// 表示に使う画像パス（未設定ならフォールバック画像）
    pub fn image_src(&self) -> &str {
        if self.image.trim().is_empty() {
            FALLBACK_IMAGE
        } else {
            &self.image
        }
    }
}

/// ヒーロー・Aboutで使う本人情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    /// ヒーロー見出しで強調する呼び名
    pub first_name: String,
    pub tagline: String,
    /// ヒーローの丸型写真
    pub photo: String,
    /// Aboutセクションの写真
    pub portrait: String,
}

/// Aboutセクションの数値ハイライト（"Experience: 5+ Years" 等）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

/// 履歴書ダウンロードカード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub title: String,
    pub summary: String,
    /// PDFのパス。Noneの場合ボタンはリンクなしで表示
    pub file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
        }
    }

    /// アイコン用のCSSクラス
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "icon-github",
            SocialKind::LinkedIn => "icon-linkedin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

/// 連絡先（フォームは表示のみ、送信処理なし）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    /// og:type
    #[serde(rename = "type")]
    pub kind: String,
}

/// ドキュメントのメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub open_graph: OpenGraph,
    pub lang: String,
}

/// ページ全体の内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioContent {
    pub metadata: SiteMetadata,
    pub profile: Profile,
    pub about: About,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub resume: Resume,
    pub contact: Contact,
}

impl PortfolioContent {
    /// JSON文字列から読み込み（欠けているフィールドは空）
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 指定種別のSNSリンク
    pub fn social(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.contact.socials.iter().find(|s| s.kind == kind)
    }
}
