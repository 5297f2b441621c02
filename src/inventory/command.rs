use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {args} exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        program: String,
        args: String,
        status: String,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Boundary to the external listing tools. Returns captured stdout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// Runs commands on the local host.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        tracing::debug!(program, ?args, "run command");
        let out = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !out.status.success() {
            return Err(CommandError::Failed {
                program: program.to_string(),
                args: args.join(" "),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        (**self).run(program, args)
    }
}

pub(super) fn list_pools<R: CommandRunner>(runner: &R) -> Result<String, CommandError> {
    runner.run("zpool", &["list", "-Hp", "-o", "name,health"])
}

pub(super) fn list_datasets<R: CommandRunner>(
    runner: &R,
    pool: &str,
) -> Result<String, CommandError> {
    runner.run(
        "zfs",
        &["list", "-r", "-Hp", "-o", "name,used,avail,mountpoint", pool],
    )
}

pub(super) fn list_snapshots<R: CommandRunner>(
    runner: &R,
    dataset: &str,
) -> Result<String, CommandError> {
    runner.run(
        "zfs",
        &[
            "list",
            "-t",
            "snapshot",
            "-r",
            "-Hp",
            "-o",
            "name,used,creation",
            dataset,
        ],
    )
}

#[cfg(test)]
#[path = "../tests/inventory/command_tests.rs"]
mod tests;
