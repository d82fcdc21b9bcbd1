use serde::Serialize;

use crate::config::ScrapeConfig;

pub type Year = i32;

/// First season published as parsable HTML pages; everything earlier only
/// exists as scanned PDF archives.
pub const HTML_ERA_START: Year = 1997;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeasonFormat {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "PDF")]
    Pdf,
}

#[derive(Debug, Clone)]
pub struct Season {
    pub year: Year,
    pub url: String,
    pub format: SeasonFormat,
}

/// Last two decimal digits of the year, zero-padded (2005 -> "05").
pub fn short_year(year: Year) -> String {
    format!("{:02}", year.rem_euclid(100))
}

impl Season {
    /// Derive the canonical listing-page URL for a year. Pure string
    /// construction; the caller holds the range precondition.
    pub fn resolve(config: &ScrapeConfig, year: Year) -> Self {
        let yy = short_year(year);
        if year >= HTML_ERA_START {
            Season {
                year,
                url: format!("{}/{}stats/teamstat.htm", config.stats_base_url, yy),
                format: SeasonFormat::Html,
            }
        } else {
            Season {
                year,
                url: format!("{}/pdf/{}stats.pdf", config.stats_base_url, yy),
                format: SeasonFormat::Pdf,
            }
        }
    }
}

/// All seasons from `current_year` down to the configured floor, newest
/// first. Each year appears exactly once.
pub fn season_links(config: &ScrapeConfig, current_year: Year) -> Vec<Season> {
    (config.year_floor..=current_year)
        .rev()
        .map(|year| Season::resolve(config, year))
        .collect()
}
