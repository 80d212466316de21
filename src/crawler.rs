use std::fs::File;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

// Crawl parameters for the 404 tool. These are fixed: the launcher always
// follows internal links, ignores external ones, and prints every checked
// url (not just the broken ones) so the report is complete.
pub const THREADS: &str = "2";
pub const INTERNAL_LINKS: &str = "follow";
pub const EXTERNAL_LINKS: &str = "ignore";
pub const TIMEOUT_SECONDS: &str = "15";

/// One invocation of the external 404 crawler.
///
/// The crawler writes its report to stdout and its statistics and network
/// errors to stderr; only stdout is captured, stderr is inherited.
#[derive(Debug)]
pub struct Crawler {
    cmd: Command,
}

impl Crawler {
    pub fn new(program: &str, url: &str) -> Crawler {
        let mut cmd = Command::new(program);
        cmd.arg(url);
        cmd.args([
            "--threads",
            THREADS,
            "--internal",
            INTERNAL_LINKS,
            "--external",
            EXTERNAL_LINKS,
            "--timeout",
            TIMEOUT_SECONDS,
            "--print-all",
        ]);
        Crawler { cmd }
    }

    pub fn cmd(&self) -> &Command {
        &self.cmd
    }

    /// Redirect the crawler's stdout into `report`, truncating any
    /// previous run's output.
    pub fn write_report_to<P: AsRef<Path>>(&mut self, report: P) -> Result<&mut Crawler> {
        let path = report.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        self.cmd.stdout(Stdio::from(file));
        Ok(self)
    }

    /// Run the crawler and block until it exits.
    pub fn run(&mut self) -> Result<ExitStatus> {
        log::debug!("running {:?}", self.cmd);
        self.cmd.status().with_context(|| {
            format!(
                "Failed to run crawler: {}",
                self.cmd.get_program().to_string_lossy()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(crawler: &Crawler) -> Vec<String> {
        crawler
            .cmd()
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_program_name() {
        let crawler = Crawler::new("404.py", "http://localhost");
        assert_eq!(crawler.cmd().get_program(), "404.py");
    }

    #[test]
    fn test_url_comes_first() {
        let crawler = Crawler::new("404.py", "http://localhost");
        assert_eq!(args_of(&crawler)[0], "http://localhost");
    }

    #[test]
    fn test_fixed_crawl_arguments() {
        let crawler = Crawler::new("404.py", "http://example.com");
        assert_eq!(
            args_of(&crawler),
            vec![
                "http://example.com",
                "--threads",
                "2",
                "--internal",
                "follow",
                "--external",
                "ignore",
                "--timeout",
                "15",
                "--print-all",
            ]
        );
    }
}
