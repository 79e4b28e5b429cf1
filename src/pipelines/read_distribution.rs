use std::path::PathBuf;
use std::sync::Arc;
use log::{debug, info, warn};
use crate::config::defs::{LogSpec, PipelineError, ReadDistributionConfig, RunConfig, READ_DISTRIBUTION_TAG, TOOL_VERSIONS};
use crate::utils::command::{check_version, generate_cli};
use crate::utils::file::file_path_manipulator;
use crate::utils::streams::run_shell_line;

/// Runs RSeQC read_distribution over one alignment: stdout becomes the
/// report file, stderr goes to the configured log destination. Blocks until
/// the tool exits; a non-zero exit fails the step with that code.
pub async fn run(run_config: Arc<RunConfig>) -> Result<(), PipelineError> {
    let args = &run_config.args;

    let version = check_version(READ_DISTRIBUTION_TAG)
        .await
        .map_err(|e| PipelineError::ToolExecution {
            tool: READ_DISTRIBUTION_TAG.to_string(),
            error: e.to_string(),
        })?;
    info!("{} version {}", READ_DISTRIBUTION_TAG, version);

    if let Some(min_version) = TOOL_VERSIONS.get(READ_DISTRIBUTION_TAG) {
        // "5.0.1" -> 5.0; unparseable versions only warn, they never block
        let numeric: f32 = version
            .split('.')
            .take(2)
            .collect::<Vec<_>>()
            .join(".")
            .parse()
            .unwrap_or(0.0);
        if numeric < *min_version {
            warn!(
                "{} version {} is older than the tested minimum {}",
                READ_DISTRIBUTION_TAG, version, min_version
            );
        }
    }

    let config_view = ReadDistributionConfig {
        extra: args.extra.clone(),
        input_aln: file_path_manipulator(&PathBuf::from(&args.input_aln), &run_config.cwd),
        input_refgene: file_path_manipulator(&PathBuf::from(&args.input_refgene), &run_config.cwd),
        output: file_path_manipulator(&PathBuf::from(&args.output), &run_config.cwd),
        log: match &args.log {
            Some(path) => LogSpec::File(file_path_manipulator(&PathBuf::from(path), &run_config.cwd)),
            None => LogSpec::Discard,
        },
    };

    let line = generate_cli(READ_DISTRIBUTION_TAG, &config_view)
        .map_err(|e| PipelineError::ToolExecution {
            tool: READ_DISTRIBUTION_TAG.to_string(),
            error: e.to_string(),
        })?;
    debug!("read_distribution command: {}", line);

    run_shell_line(READ_DISTRIBUTION_TAG, &line).await?;

    info!("Report written to {}", config_view.output.display());
    Ok(())
}
