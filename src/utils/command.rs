/// Functions and structs for working with creating command-line arguments

use anyhow::{anyhow, Result};
use crate::config::defs::{ReadDistributionConfig, READ_DISTRIBUTION_TAG};


mod read_distribution {
    use anyhow::{anyhow, Result};
    use tokio::process::Command;
    use crate::config::defs::{ReadDistributionConfig, READ_DISTRIBUTION_TAG};
    use crate::utils::streams::{read_child_output_to_vec, ChildStream};

    pub async fn read_distribution_presence_check() -> Result<String> {
        let args: Vec<&str> = vec!["--version"];

        let mut child = Command::new(READ_DISTRIBUTION_TAG)
            .args(&args)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .map_err(|e| anyhow!("Failed to spawn {}: {}. Is RSeQC installed?", READ_DISTRIBUTION_TAG, e))?;

        let lines = read_child_output_to_vec(&mut child, ChildStream::Stdout).await?;
        let first_line = lines
            .first()
            .ok_or_else(|| anyhow!("No output from {} --version", READ_DISTRIBUTION_TAG))?;
        let version = first_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| anyhow!("Invalid {} --version output: {}", READ_DISTRIBUTION_TAG, first_line))?
            .to_string();
        if version.is_empty() {
            return Err(anyhow!("Empty version number in --version output: {}", first_line));
        }
        Ok(version)
    }

    /// Renders the invocation template, redirections included. `extra` goes
    /// in verbatim and unescaped; an empty string leaves the template's
    /// double space behind, which the shell collapses during word splitting.
    pub fn shell_line(config: &ReadDistributionConfig) -> String {
        format!(
            "{} {} --input-file {} --refgene {} > {} {}",
            READ_DISTRIBUTION_TAG,
            config.extra,
            config.input_aln.display(),
            config.input_refgene.display(),
            config.output.display(),
            config.log.redirection(),
        )
    }
}

pub fn generate_cli(tool: &str, config: &ReadDistributionConfig) -> Result<String> {

    let cmd = match tool {
        READ_DISTRIBUTION_TAG => read_distribution::shell_line(config),
        _ => return Err(anyhow::anyhow!("Unknown tool: {}", tool)),
    };

    Ok(cmd)
}


pub async fn check_version(tool: &str) -> Result<String> {
    let version = match tool {
        READ_DISTRIBUTION_TAG => read_distribution::read_distribution_presence_check().await,
        _ => return Err(anyhow!("Unknown tool: {}", tool)),
    };
    Ok(version?)
}


#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use super::*;
    use crate::config::defs::LogSpec;

    fn view(extra: &str, log: LogSpec) -> ReadDistributionConfig {
        ReadDistributionConfig {
            extra: extra.to_string(),
            input_aln: PathBuf::from("a.bam"),
            input_refgene: PathBuf::from("ref.bed"),
            output: PathBuf::from("out.txt"),
            log,
        }
    }

    #[test]
    fn empty_extra_matches_template() {
        let line = generate_cli(READ_DISTRIBUTION_TAG, &view("", LogSpec::Discard)).unwrap();
        assert_eq!(
            line,
            "read_distribution.py  --input-file a.bam --refgene ref.bed > out.txt 2> /dev/null"
        );
    }

    #[test]
    fn extra_is_verbatim_between_tool_and_input_flag() {
        let line = generate_cli(READ_DISTRIBUTION_TAG, &view("-q 30 --unsorted", LogSpec::Discard)).unwrap();
        assert!(line.starts_with("read_distribution.py -q 30 --unsorted --input-file a.bam "));
    }

    #[test]
    fn log_file_redirects_stderr_only() {
        let line = generate_cli(READ_DISTRIBUTION_TAG, &view("", LogSpec::File(PathBuf::from("rd.log")))).unwrap();
        assert!(line.ends_with("> out.txt 2> rd.log"));
        assert_eq!(line.matches("rd.log").count(), 1);
    }

    #[test]
    fn unknown_tool_is_rejected() {
        assert!(generate_cli("samtools", &view("", LogSpec::Discard)).is_err());
    }
}
