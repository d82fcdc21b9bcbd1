use log::warn;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::{
    config::ScrapeConfig,
    season::{Season, SeasonFormat, short_year},
};

fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

const UNKNOWN_DATE: &str = "Unknown Date";
const UNKNOWN_LOCATION: &str = "Unknown Location";
const UNKNOWN_RESULT: &str = "Unknown Result";

/// One box-score link. HTML seasons produce one per game row; PDF seasons
/// produce a single placeholder pointing at the season archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxScoreRecord {
    pub date: String,
    pub location: String,
    pub result: String,
    pub url: String,
    pub format: SeasonFormat,
}

impl BoxScoreRecord {
    /// Sentinel for a PDF-era season. No PDF parsing happens anywhere, so
    /// this marks "archive exists, structured extraction out of scope".
    pub fn pdf_placeholder(season: &Season) -> Self {
        BoxScoreRecord {
            date: format!("Jan 1, {}", season.year),
            location: "Baton Rouge, LA".to_string(),
            result: "N/A".to_string(),
            url: season.url.clone(),
            format: SeasonFormat::Pdf,
        }
    }
}

/// Pull every box-score link out of an HTML-era season page.
///
/// Only the first table on the page is consulted. A row counts as a game
/// when it carries an anchor whose text is exactly "Box score"; header
/// rows, bye dates and other filler rows fall through. The markup's
/// relative hrefs are unreliable, so only the filename survives and the
/// absolute URL is rebuilt under the season's stats directory.
pub fn extract_box_scores(
    config: &ScrapeConfig,
    season: &Season,
    html: &str,
) -> Vec<BoxScoreRecord> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let Some(table) = document.select(&table_selector).next() else {
        warn!("No table found on season page for {}", season.year);
        return Vec::new();
    };

    let mut records = Vec::new();
    for row in table.select(&row_selector) {
        let Some(anchor) = row
            .select(&anchor_selector)
            .find(|a| extract_text(*a) == "Box score")
        else {
            continue;
        };
        // A "Box score" label with no link target is not a valid record.
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| extract_text(cell).trim().to_string())
            .collect();
        let cell_or = |index: usize, fallback: &str| {
            cells
                .get(index)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        let filename = href.rsplit('/').next().unwrap_or(href);
        let url = format!(
            "{}/{}stats/{}",
            config.stats_base_url,
            short_year(season.year),
            filename
        );

        records.push(BoxScoreRecord {
            date: cell_or(0, UNKNOWN_DATE),
            location: cell_or(1, UNKNOWN_LOCATION),
            result: cell_or(2, UNKNOWN_RESULT),
            url,
            format: SeasonFormat::Html,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScrapeConfig {
        ScrapeConfig::default()
    }

    fn season(year: crate::season::Year) -> Season {
        Season::resolve(&config(), year)
    }

    const SEASON_PAGE: &str = r#"<html><body>
        <table>
          <tr><th>Date</th><th>Location</th><th>Result</th><th>Links</th></tr>
          <tr>
            <td>Jan 15, 2023</td>
            <td>Baton Rouge, LA</td>
            <td>W 5-2</td>
            <td><a href="boxscore/2023/01/15/game1.htm">Box score</a></td>
          </tr>
          <tr>
            <td>Jan 20, 2023</td>
            <td>Houston, TX</td>
            <td>Cancelled</td>
          </tr>
        </table>
        </body></html>"#;

    #[test]
    fn extracts_record_and_rebuilds_url_from_filename() {
        let records = extract_box_scores(&config(), &season(2023), SEASON_PAGE);
        assert_eq!(
            records,
            vec![BoxScoreRecord {
                date: "Jan 15, 2023".to_string(),
                location: "Baton Rouge, LA".to_string(),
                result: "W 5-2".to_string(),
                url: "https://static.lsusports.net/assets/docs/bb/23stats/game1.htm".to_string(),
                format: SeasonFormat::Html,
            }]
        );
    }

    #[test]
    fn rows_without_box_score_anchor_contribute_nothing() {
        let html = r#"<table><tr>
            <td>Feb 2, 2023</td><td>Alex Box Stadium</td><td>W 9-0</td>
            <td><a href="recap/game2.htm">Recap</a></td>
        </tr></table>"#;
        assert!(extract_box_scores(&config(), &season(2023), html).is_empty());
    }

    #[test]
    fn anchor_without_href_is_skipped() {
        let html = r#"<table><tr>
            <td>Feb 3, 2023</td><td>Alex Box Stadium</td><td>W 4-1</td>
            <td><a>Box score</a></td>
        </tr></table>"#;
        assert!(extract_box_scores(&config(), &season(2023), html).is_empty());
    }

    #[test]
    fn missing_table_yields_empty_sequence() {
        let html = "<html><body><p>Season cancelled</p></body></html>";
        assert!(extract_box_scores(&config(), &season(2023), html).is_empty());
    }

    #[test]
    fn missing_cells_fall_back_to_defaults() {
        // The anchor sits in a <th>, so the row has a single <td>: the date.
        let html = r#"<table><tr>
            <td>Mar 3, 2023</td>
            <th><a href="game3.htm">Box score</a></th>
        </tr></table>"#;
        let records = extract_box_scores(&config(), &season(2023), html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "Mar 3, 2023");
        assert_eq!(records[0].location, "Unknown Location");
        assert_eq!(records[0].result, "Unknown Result");
        assert_eq!(
            records[0].url,
            "https://static.lsusports.net/assets/docs/bb/23stats/game3.htm"
        );
    }

    #[test]
    fn cell_text_is_trimmed() {
        let html = "<table><tr>
            <td>\n  Apr 8, 2023  </td><td>  Omaha, NE\n</td><td> W 2-1 </td>
            <td><a href=\"g4.htm\">Box score</a></td>
        </tr></table>";
        let records = extract_box_scores(&config(), &season(2023), html);
        assert_eq!(records[0].date, "Apr 8, 2023");
        assert_eq!(records[0].location, "Omaha, NE");
        assert_eq!(records[0].result, "W 2-1");
    }

    #[test]
    fn duplicate_rows_are_not_deduplicated() {
        let row = r#"<tr>
            <td>May 5, 2023</td><td>Hoover, AL</td><td>W 6-5</td>
            <td><a href="g5.htm">Box score</a></td>
        </tr>"#;
        let html = format!("<table>{row}{row}</table>");
        let records = extract_box_scores(&config(), &season(2023), &html);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn bare_filename_href_is_kept_as_is() {
        let html = r#"<table><tr>
            <td>Jun 1, 1999</td><td>Omaha, NE</td><td>W 10-4</td>
            <td><a href="cws1.htm">Box score</a></td>
        </tr></table>"#;
        let records = extract_box_scores(&config(), &season(1999), html);
        assert_eq!(
            records[0].url,
            "https://static.lsusports.net/assets/docs/bb/99stats/cws1.htm"
        );
    }

    #[test]
    fn pdf_placeholder_carries_the_archive_url() {
        let season = season(1987);
        let record = BoxScoreRecord::pdf_placeholder(&season);
        assert_eq!(record.date, "Jan 1, 1987");
        assert_eq!(record.location, "Baton Rouge, LA");
        assert_eq!(record.result, "N/A");
        assert_eq!(record.url, season.url);
        assert_eq!(record.format, SeasonFormat::Pdf);
    }
}
