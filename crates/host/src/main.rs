mod config;
mod jobs;
mod log;

use anyhow::Result;
use config::HostConfig;
use jobs::JobRunner;
use log::Logging;
use tracing::info;

fn main() -> Result<()> {
    let logging = Logging::new();
    logging.early_init();

    let config = HostConfig::from_env()?;
    let gate = config.build_gate();
    info!(threshold = %gate.level(), sink = ?config.sink, "log gate ready");

    let jobs: Vec<String> = std::env::args().skip(1).collect();
    let succeeded = JobRunner::new(&gate).run(jobs.iter().map(String::as_str));
    info!(succeeded, total = jobs.len(), "host finished");
    Ok(())
}
