//! 外部リソースの取得

pub mod content;
