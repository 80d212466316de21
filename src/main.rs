mod crawler;
use crate::crawler::Crawler;

use anyhow::Result;
use clap::Parser;

/// Runs the 404 dead link crawler against a URL and saves its report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Url to crawl looking for dead links
    url: Option<String>,

    /// File the crawler's report is written to
    #[arg(long, default_value = "report.txt")]
    report: String,

    /// Crawler executable to invoke
    #[arg(long, default_value = "404.py")]
    crawler: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let url = match cli.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            println!("Usage: linkreport <url>");
            std::process::exit(1);
        }
    };

    println!("Crawling {}", url);

    let status = Crawler::new(&cli.crawler, url)
        .write_report_to(&cli.report)?
        .run()?;

    if !status.success() {
        // Mirror the crawler's own exit code; 1 when it died to a signal.
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
