use clap::ValueEnum;
use serde::Serialize;

/// Companion filter dimension, matched as a substring against the
/// `who_with` column of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Companion {
    /// 一人で
    Solo,
    /// 家族と
    Family,
    /// 友人と
    Friends,
    /// カップルで
    Couple,
}

impl Companion {
    /// Tag string as it appears in the dataset.
    pub fn tag(&self) -> &'static str {
        match self {
            Companion::Solo => "一人で",
            Companion::Family => "家族と",
            Companion::Friends => "友人と",
            Companion::Couple => "カップルで",
        }
    }

    /// Helper: resolve a dataset tag back to the enum (used by `check`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            Companion::Solo,
            Companion::Family,
            Companion::Friends,
            Companion::Couple,
        ]
        .into_iter()
        .find(|c| c.tag() == tag)
    }
}
