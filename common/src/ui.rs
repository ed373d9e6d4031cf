//! ページのUI状態（テーマ・モバイルメニュー・アクティブセクション）
//!
//! 状態はマウント時に毎回初期化され、永続化しない。
//! DOM操作は呼び出し側が `Effect` を見て行う。

use crate::error::Error;
use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ダークテーマ時にドキュメントルートへ付けるクラス
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// ルート要素に付けるクラス
    pub fn root_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "l" => Ok(Theme::Light),
            "dark" | "d" => Ok(Theme::Dark),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// UIイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ToggleTheme,
    ToggleMobileMenu,
    /// ナビゲーション項目・ヒーローのボタンのクリック
    NavigateTo(SectionId),
    /// スクロールスパイがセクションを検出
    Scrolled(SectionId),
}

/// 状態遷移に伴うDOM側の処理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// ルート要素のクラスを付け外しする
    SetRootClass { class: &'static str, enabled: bool },
    /// セクションまでスムーズスクロール
    ScrollTo(SectionId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
    pub active_section: SectionId,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Default::default() }
    }

    /// イベントを適用し、必要なDOM処理を返す
    pub fn apply(&mut self, event: UiEvent) -> Option<Effect> {
        match event {
            UiEvent::ToggleTheme => {
                self.theme = self.theme.toggle();
                Some(Effect::SetRootClass {
                    class: DARK_CLASS,
                    enabled: self.theme.is_dark(),
                })
            }
            UiEvent::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                None
            }
            UiEvent::NavigateTo(id) => {
                self.mobile_menu_open = false;
                Some(Effect::ScrollTo(id))
            }
            UiEvent::Scrolled(id) => {
                self.active_section = id;
                None
            }
        }
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active_section == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_theme_flips_only_theme() {
        let mut state = UiState::default();
        let before = state;

        let effect = state.apply(UiEvent::ToggleTheme);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.mobile_menu_open, before.mobile_menu_open);
        assert_eq!(state.active_section, before.active_section);
        assert_eq!(
            effect,
            Some(Effect::SetRootClass { class: "dark", enabled: true })
        );

        let effect = state.apply(UiEvent::ToggleTheme);
        assert_eq!(state, before);
        assert_eq!(
            effect,
            Some(Effect::SetRootClass { class: "dark", enabled: false })
        );
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        for id in SectionId::ALL {
            let mut state = UiState::default();
            state.apply(UiEvent::ToggleMobileMenu);
            assert!(state.mobile_menu_open);

            let effect = state.apply(UiEvent::NavigateTo(id));
            assert!(!state.mobile_menu_open);
            assert_eq!(effect, Some(Effect::ScrollTo(id)));
        }
    }

    #[test]
    fn test_navigate_with_closed_menu() {
        let mut state = UiState::default();
        state.apply(UiEvent::NavigateTo(SectionId::Contact));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_navigate_does_not_set_active() {
        // アクティブ表示はスクロールスパイに任せる
        let mut state = UiState::default();
        state.apply(UiEvent::NavigateTo(SectionId::Skills));
        assert_eq!(state.active_section, SectionId::Home);
    }

    #[test]
    fn test_scrolled_sets_single_active() {
        let mut state = UiState::default();
        assert!(state.is_active(SectionId::Home));
        state.apply(UiEvent::Scrolled(SectionId::Resume));
        let active: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|&id| state.is_active(id))
            .collect();
        assert_eq!(active, vec![SectionId::Resume]);
    }

    #[test]
    fn test_theme_root_class() {
        assert_eq!(Theme::Light.root_class(), None);
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
