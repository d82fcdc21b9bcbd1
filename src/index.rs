use std::{fs, path::Path};

use anyhow::Context;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
    boxscore::BoxScoreRecord,
    season::{Season, SeasonFormat, Year},
};

/// Year -> box-score records, in insertion order. The driver inserts
/// newest season first, so the serialized JSON object keeps descending
/// years; a year already present is never overwritten.
#[derive(Debug, Default)]
pub struct SeasonIndex {
    entries: Vec<(Season, Vec<BoxScoreRecord>)>,
}

impl SeasonIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, season: Season, records: Vec<BoxScoreRecord>) {
        if self.entries.iter().any(|(s, _)| s.year == season.year) {
            return;
        }
        self.entries.push((season, records));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }

    /// Years whose records are PDF placeholders, ascending.
    pub fn pdf_years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self
            .entries
            .iter()
            .filter(|(_, records)| records.iter().any(|r| r.format == SeasonFormat::Pdf))
            .map(|(season, _)| season.year)
            .collect();
        years.sort_unstable();
        years
    }

    /// Years that ended up with no records at all, ascending. Covers both
    /// unreachable pages and pages without a schedule table.
    pub fn empty_years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self
            .entries
            .iter()
            .filter(|(_, records)| records.is_empty())
            .map(|(season, _)| season.year)
            .collect();
        years.sort_unstable();
        years
    }

    /// Write the whole index as one pretty-printed JSON object.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write output file {}", path.display()))?;
        Ok(())
    }
}

impl Serialize for SeasonIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (season, records) in &self.entries {
            map.serialize_entry(&season.year.to_string(), records)?;
        }
        map.end()
    }
}
