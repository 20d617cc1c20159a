use clap::ValueEnum;
use serde::Serialize;

/// Mood filter dimension. Each variant carries the Japanese tag that is
/// matched as a substring against the `mood` column of the catalog.
/// "No filter" is represented by `Option<Mood>::None` at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Mood {
    /// のんびり
    Relaxed,
    /// 美味しいもの
    Food,
    /// 買い物
    Shopping,
    /// 散策
    Stroll,
    /// 景色
    Scenery,
    /// 体を動かす
    Exercise,
    /// アクティブ
    Active,
    /// 歴史
    History,
    /// 文化
    Culture,
}

impl Mood {
    /// Tag string as it appears in the dataset.
    pub fn tag(&self) -> &'static str {
        match self {
            Mood::Relaxed => "のんびり",
            Mood::Food => "美味しいもの",
            Mood::Shopping => "買い物",
            Mood::Stroll => "散策",
            Mood::Scenery => "景色",
            Mood::Exercise => "体を動かす",
            Mood::Active => "アクティブ",
            Mood::History => "歴史",
            Mood::Culture => "文化",
        }
    }

    /// Helper: resolve a dataset tag back to the enum (used by `check`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            Mood::Relaxed,
            Mood::Food,
            Mood::Shopping,
            Mood::Stroll,
            Mood::Scenery,
            Mood::Exercise,
            Mood::Active,
            Mood::History,
            Mood::Culture,
        ]
        .into_iter()
        .find(|m| m.tag() == tag)
    }
}
