use serde::{Deserialize, Serialize};

/// One recommendable spot, i.e. one row of the catalog CSV.
///
/// `name`, `category`, `description` and `address` are always present;
/// everything else may be empty in the source file and deserializes to
/// `None` (the `csv` crate maps empty fields to `None` for `Option`s).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spot {
    pub name: String,
    pub category: String,

    /// Free-text mood tags (e.g. "のんびり,散策"), matched by substring.
    pub mood: Option<String>,

    /// Typical visit length in minutes. Unknown lengths never match a
    /// duration filter.
    pub duration_min: Option<u32>,

    /// Free-text companion tags (e.g. "家族と,友人と"), matched by substring.
    pub who_with: Option<String>,

    pub description: String,
    pub address: String,

    pub url: Option<String>,
    pub image_path: Option<String>,

    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Spot {
    /// Mood tags with absence normalized to the empty string,
    /// which matches no specific filter.
    pub fn mood_tags(&self) -> &str {
        self.mood.as_deref().unwrap_or("")
    }

    /// Companion tags, same absence handling as [`Spot::mood_tags`].
    pub fn who_with_tags(&self) -> &str {
        self.who_with.as_deref().unwrap_or("")
    }

    /// Both coordinates, or `None` when either is missing.
    /// A spot without coordinates gets no marker and does not
    /// participate in map centering.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Website URL, treating the empty string as "no link".
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Image path, same empty-string handling as [`Spot::link`].
    pub fn image(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|p| !p.trim().is_empty())
    }
}
