mod boxscore;
mod config;
mod index;
pub mod logging;
mod requests;
mod scrape;
mod season;

pub use boxscore::{BoxScoreRecord, extract_box_scores};
pub use config::ScrapeConfig;
pub use index::SeasonIndex;
pub use requests::RequestClient;
pub use scrape::scrape_all_seasons;
pub use season::{Season, SeasonFormat, Year, season_links, short_year};
