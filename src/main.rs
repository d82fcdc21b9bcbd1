use log::{error, info, warn};
use lsu_boxscores::{RequestClient, ScrapeConfig, Year, logging, scrape_all_seasons};

fn join_years(years: &[Year]) -> String {
    years
        .iter()
        .map(Year::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ScrapeConfig::default();
    logging::init(&config.log_path)?;

    info!("Starting LSU Baseball stats scraper");

    let client = RequestClient::new()?;
    let index = match scrape_all_seasons(&config, &client).await {
        Ok(index) => index,
        Err(e) => {
            error!("Scraping failed: {e:#}");
            std::process::exit(1);
        }
    };

    index.write_json(&config.output_path)?;
    info!(
        "Saved box score links to {}",
        config.output_path.display()
    );

    info!(
        "Scraping completed. Found {} seasons with {} total box score links.",
        index.len(),
        index.total_records()
    );

    let pdf_years = index.pdf_years();
    if !pdf_years.is_empty() {
        warn!(
            "The following years have PDF links, which are not directly parsable: {}",
            join_years(&pdf_years)
        );
    }

    let empty_years = index.empty_years();
    if !empty_years.is_empty() {
        warn!(
            "The following years have no data found: {}",
            join_years(&empty_years)
        );
    }

    Ok(())
}
