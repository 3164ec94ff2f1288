use agent_setup::{setup, Params};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

fn main() -> Result<()> {
    let params = Params::parse();

    tracing_subscriber::fmt()
        .with_max_level(params.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .compact()
        .init();

    let cfg = match setup::run(&params) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("agent configuration failed: {:#}", e);
            return Err(e);
        }
    };

    if params.print {
        let out = serde_json::to_string_pretty(&cfg.redacted()).context("encoding config")?;
        println!("{}", out);
    }

    Ok(())
}
