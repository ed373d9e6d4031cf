//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とUIロジック

pub mod types;
pub mod defaults;
pub mod error;
pub mod section;
pub mod scroll_spy;
pub mod ui;

pub use types::{
    About, Contact, Highlight, OpenGraph, PortfolioContent, Profile, Project, Resume,
    SiteMetadata, Skill, SocialKind, SocialLink, FALLBACK_IMAGE,
};
pub use error::{Error, Result};
pub use section::SectionId;
pub use scroll_spy::{active_section, ScrollSpy, SectionBounds, SCROLL_OFFSET};
pub use ui::{Effect, Theme, UiEvent, UiState, DARK_CLASS};
