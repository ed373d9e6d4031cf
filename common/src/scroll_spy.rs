//! スクロール位置からアクティブなセクションを決める
//!
//! スクロールイベント毎に各セクションのoffsetTop/offsetHeightを読み、
//! `scrollY + SCROLL_OFFSET` を含む最初のセクションをアクティブにする。

use crate::section::SectionId;

/// 固定ナビゲーションの高さ分のオフセット(px)
pub const SCROLL_OFFSET: f64 = 100.0;

/// セクション要素のレイアウト情報
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, offset_top: f64, offset_height: f64) -> Self {
        Self { id, offset_top, offset_height }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.offset_height
    }
}

/// 表示中のセクションを探す（該当なしはNone）
///
/// `bounds` は文書順であること。DOMに存在しないセクションは含めない。
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    let position = scroll_y + SCROLL_OFFSET;
    bounds.iter().find(|b| b.contains(position)).map(|b| b.id)
}

/// 常に1つのセクションをアクティブとして保持する
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    current: SectionId,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    /// スクロール位置を反映し、変化した場合のみ新しいセクションを返す
    ///
    /// どのセクションにも該当しない位置では直前のセクションを維持する。
    pub fn update(&mut self, scroll_y: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
        match active_section(scroll_y, bounds) {
            Some(id) if id != self.current => {
                self.current = id;
                Some(id)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 各セクション800px、ヒーローのみ1000px
    fn layout() -> Vec<SectionBounds> {
        let mut top = 0.0;
        SectionId::ALL
            .iter()
            .map(|&id| {
                let height = if id == SectionId::Home { 1000.0 } else { 800.0 };
                let b = SectionBounds::new(id, top, height);
                top += height;
                b
            })
            .collect()
    }

    #[test]
    fn test_top_of_page_is_home() {
        assert_eq!(active_section(0.0, &layout()), Some(SectionId::Home));
    }

    #[test]
    fn test_offset_applied() {
        let bounds = layout();
        // 900 + 100 = 1000 → About の先頭
        assert_eq!(active_section(900.0, &bounds), Some(SectionId::About));
        assert_eq!(active_section(899.0, &bounds), Some(SectionId::Home));
    }

    #[test]
    fn test_upper_bound_exclusive() {
        let bounds = [
            SectionBounds::new(SectionId::Home, 0.0, 100.0),
            SectionBounds::new(SectionId::About, 100.0, 100.0),
        ];
        assert_eq!(active_section(0.0, &bounds), Some(SectionId::About));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let bounds = [
            SectionBounds::new(SectionId::Skills, 0.0, 500.0),
            SectionBounds::new(SectionId::Resume, 0.0, 500.0),
        ];
        assert_eq!(active_section(0.0, &bounds), Some(SectionId::Skills));
    }

    #[test]
    fn test_past_the_end_is_none() {
        assert_eq!(active_section(1_000_000.0, &layout()), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_spy_defaults_to_home() {
        let spy = ScrollSpy::new();
        assert_eq!(spy.current(), SectionId::Home);
    }

    #[test]
    fn test_spy_reports_changes_only() {
        let bounds = layout();
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.update(0.0, &bounds), None);
        assert_eq!(spy.update(1900.0, &bounds), Some(SectionId::Projects));
        assert_eq!(spy.update(1950.0, &bounds), None);
        assert_eq!(spy.current(), SectionId::Projects);
    }

    #[test]
    fn test_spy_keeps_previous_when_nothing_matches() {
        let bounds = layout();
        let mut spy = ScrollSpy::new();
        spy.update(4500.0, &bounds);
        assert_eq!(spy.current(), SectionId::Contact);
        assert_eq!(spy.update(99_999.0, &bounds), None);
        assert_eq!(spy.current(), SectionId::Contact);
    }

    #[test]
    fn test_missing_section_skipped() {
        let bounds: Vec<_> = layout()
            .into_iter()
            .filter(|b| b.id != SectionId::About)
            .collect();
        // About の領域は誰にも属さない
        assert_eq!(active_section(1200.0, &bounds), None);
    }
}
