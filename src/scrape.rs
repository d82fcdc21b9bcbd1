use std::time::Duration;

use chrono::{Datelike, Utc};
use log::{error, info, warn};
use tokio::time::sleep;

use crate::{
    boxscore::{BoxScoreRecord, extract_box_scores},
    config::ScrapeConfig,
    index::SeasonIndex,
    requests::RequestClient,
    season::{Season, SeasonFormat, season_links},
};

/// Pause between successive page fetches so the archive server is not
/// hammered.
const FETCH_DELAY: Duration = Duration::from_secs(1);

/// Walk every season from the current year down to the configured floor
/// and collect its box-score links. Per-season failures degrade to an
/// empty record list; only producing no season links at all is fatal.
pub async fn scrape_all_seasons(
    config: &ScrapeConfig,
    client: &RequestClient,
) -> anyhow::Result<SeasonIndex> {
    let seasons = season_links(config, Utc::now().year());
    if seasons.is_empty() {
        anyhow::bail!("no season links generated");
    }
    info!("Generated {} season links", seasons.len());

    let mut index = SeasonIndex::new();
    for season in seasons {
        info!("Processing season: {}", season.year);
        let records = match process_season(config, client, &season).await {
            Ok(records) => records,
            Err(e) => {
                error!("Error processing season {}: {e:#}", season.year);
                Vec::new()
            }
        };
        if records.is_empty() {
            warn!("No data available for season {}", season.year);
        } else {
            info!(
                "Found {} box score links for season {}",
                records.len(),
                season.year
            );
        }
        index.insert(season, records);
    }

    Ok(index)
}

async fn process_season(
    config: &ScrapeConfig,
    client: &RequestClient,
    season: &Season,
) -> anyhow::Result<Vec<BoxScoreRecord>> {
    match season.format {
        SeasonFormat::Pdf => {
            // Nothing to fetch; the archive PDF is not parsed, only linked.
            let record = BoxScoreRecord::pdf_placeholder(season);
            info!("Added PDF link for season {}: {}", season.year, season.url);
            Ok(vec![record])
        }
        SeasonFormat::Html => {
            sleep(FETCH_DELAY).await;
            match client.fetch_page(&season.url).await {
                Ok(html) => Ok(extract_box_scores(config, season, &html)),
                Err(e) => {
                    warn!(
                        "Failed to fetch season page for {}, URL: {}: {e:#}",
                        season.year, season.url
                    );
                    Ok(Vec::new())
                }
            }
        }
    }
}
