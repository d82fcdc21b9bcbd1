use std::path::PathBuf;

use crate::season::Year;

/// Fixed parameters for a scrape run. There are no flags, env vars or
/// config files; everything is baked into `Default` and the value is
/// passed by reference from `main`.
pub struct ScrapeConfig {
    /// Root under which both the HTML-era season directories and the PDF
    /// archive live.
    pub stats_base_url: String,
    /// Earliest season with any archived data.
    pub year_floor: Year,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            stats_base_url: "https://static.lsusports.net/assets/docs/bb".to_string(),
            year_floor: 1949,
            output_path: PathBuf::from("lsu_baseball_box_scores.json"),
            log_path: PathBuf::from("lsu_baseball_stats.log"),
        }
    }
}
