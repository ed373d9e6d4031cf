//! ページを構成するセクションコンポーネント

pub mod navigation;
pub mod hero;
pub mod about;
pub mod projects;
pub mod skills;
pub mod resume;
pub mod contact;
pub mod footer;
pub mod section_heading;
