use serde::{Deserialize, Serialize};

/// One catalog entry, decoded from a single line of the catalog file.
///
/// The catalog file names the identifier field `track`; everything else
/// maps one to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier within one catalog.
    #[serde(rename = "track")]
    pub id: u64,
    /// Artist name.
    pub artist: String,
    /// Track title.
    pub title: String,
    /// Ids of tracks recommended alongside this one.
    #[serde(default)]
    pub recommendations: Vec<u64>,
}
