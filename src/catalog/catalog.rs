use std::path::Path;

use log::info;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::catalog::codec;
use crate::catalog::entities::Track;
use crate::catalog::errors::{Error, Result};
use crate::catalog::store::KeyValueStore;

/// Default name of the subject field in a recommendations file.
pub const DEFAULT_SUBJECT_FIELD: &str = "user";
/// Default name of the list field in a recommendations file.
pub const DEFAULT_LIST_FIELD: &str = "tracks";

/// The in-memory collection of loaded tracks and the operations that
/// load and export them.
///
/// A catalog is populated once at load time and read-only afterwards.
/// Export operations borrow the store handle, they never own it.
#[derive(Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Load tracks from a file containing one JSON object per line.
    ///
    /// Lines are appended in file order; that order defines iteration
    /// order everywhere else. The first malformed line aborts the whole
    /// load, so a failed call yields no catalog at all.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading tracks from {}", path.display());

        let file = File::open(path).await?;
        let mut lines = BufReader::new(file).lines();
        let mut tracks = Vec::new();
        let mut line_no = 0usize;
        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            let track: Track = serde_json::from_str(&line)
                .map_err(|e| Error::ParseError(format!("{}:{line_no}: {e}", path.display())))?;
            tracks.push(track);
        }

        info!("Loaded {} tracks", tracks.len());
        Ok(Catalog { tracks })
    }

    /// Build a catalog from an already materialized track sequence.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Catalog { tracks }
    }

    /// The loaded tracks, in file order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Export every track to the store, keyed by its id, as one bulk write.
    ///
    /// Nothing is written for an empty catalog; some stores reject an
    /// empty bulk write.
    pub async fn publish_tracks(&self, store: &dyn KeyValueStore) -> Result<()> {
        info!("Uploading tracks to the store");

        let mut entries = Vec::with_capacity(self.tracks.len());
        for track in &self.tracks {
            entries.push((track.id.to_string(), codec::to_bytes(track)?));
        }
        if entries.is_empty() {
            return Ok(());
        }
        store.set_many(entries).await
    }

    /// Export an artist → track-id index to the store as one bulk write.
    ///
    /// Tracks are stable-sorted by artist name, so each artist ends up
    /// under a single key and ties keep their file encounter order.
    pub async fn publish_artists(&self, store: &dyn KeyValueStore) -> Result<()> {
        info!("Uploading artists to the store");

        let mut sorted: Vec<&Track> = self.tracks.iter().collect();
        sorted.sort_by(|a, b| a.artist.cmp(&b.artist));

        let mut entries = Vec::new();
        for group in sorted.chunk_by(|a, b| a.artist == b.artist) {
            let ids: Vec<u64> = group.iter().map(|t| t.id).collect();
            entries.push((group[0].artist.clone(), codec::to_bytes(&ids)?));
        }

        let uploaded = entries.len();
        if !entries.is_empty() {
            store.set_many(entries).await?;
        }
        info!("Uploaded {uploaded} artists");
        Ok(())
    }

    /// Export per-subject recommendation lists from an independent
    /// line-delimited JSON file, one point write per line, in file order.
    ///
    /// Each line must carry `subject_field` (a string or a number, used as
    /// the store key) and `list_field` (an array of track ids). See
    /// [`DEFAULT_SUBJECT_FIELD`] and [`DEFAULT_LIST_FIELD`].
    pub async fn publish_recommendations(
        store: &dyn KeyValueStore,
        path: impl AsRef<Path>,
        subject_field: &str,
        list_field: &str,
    ) -> Result<()> {
        let path = path.as_ref();
        info!("Uploading recommendations from {} to the store", path.display());

        let file = File::open(path).await?;
        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0usize;
        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            let record: serde_json::Value = serde_json::from_str(&line)
                .map_err(|e| Error::ParseError(format!("{}:{line_no}: {e}", path.display())))?;

            let key = subject_key(&record, subject_field).ok_or_else(|| {
                Error::ParseError(format!(
                    "{}:{line_no}: field `{subject_field}` is missing or not usable as a store key",
                    path.display()
                ))
            })?;
            let list = record.get(list_field).ok_or_else(|| {
                Error::ParseError(format!(
                    "{}:{line_no}: missing field `{list_field}`",
                    path.display()
                ))
            })?;
            let ids: Vec<u64> = serde_json::from_value(list.clone())
                .map_err(|e| Error::ParseError(format!("{}:{line_no}: {e}", path.display())))?;

            store.set(&key, codec::to_bytes(&ids)?).await?;
        }

        info!(
            "Uploaded recommendations from {} for {line_no} {subject_field}",
            path.display()
        );
        Ok(())
    }
}

// Render the subject value as a store key; only scalars that have an
// unambiguous string form qualify.
fn subject_key(record: &serde_json::Value, field: &str) -> Option<String> {
    match record.get(field)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
