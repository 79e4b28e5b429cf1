mod pipelines;
mod utils;
mod config;
mod cli;

use std::env;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::{LevelFilter, info, error};
use env_logger::Builder;

use crate::cli::parse;
use crate::config::defs::{PipelineError, RunConfig};
use pipelines::read_distribution;


#[tokio::main]
async fn main() -> Result<()> {
    let run_start = Instant::now();

    let args = parse();

    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    println!("\n-------------\n RSeQC Steps\n-------------\n");

    let dir = env::current_dir()?;
    info!("The current directory is {:?}\n", dir);

    let module = args.module.clone();
    let run_config = Arc::new(RunConfig { cwd: dir, args });

    if let Err(e) = match module.as_str() {
        "read_distribution" => read_distribution_run(run_config).await,
        _ => Err(PipelineError::InvalidConfig(format!("Invalid module: {}", module))),
    } {
        error!("Pipeline failed: {} at {} milliseconds.", e, run_start.elapsed().as_millis());
        // the child's own exit status travels up through the step failure
        let code = match &e {
            PipelineError::ToolFailed { code, .. } => *code,
            _ => 1,
        };
        std::process::exit(code);
    }

    println!("Run complete: {} milliseconds.", run_start.elapsed().as_millis());
    Ok(())
}


async fn read_distribution_run(run_config: Arc<RunConfig>) -> Result<(), PipelineError> {
    read_distribution::run(run_config).await
}
