//! External command steps.
//! The post-generation chores (dependency install, git init/add/commit) are
//! modeled as a data-driven list of named steps, each carrying its commands,
//! working directory, and failure policy. A small runner executes them
//! strictly sequentially, so later steps see the filesystem state earlier
//! ones left behind.

use log::{error, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// What a failing step does to the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the pipeline with an error
    Fatal,
    /// Log an error and continue; the user can redo the step manually
    LogError,
    /// Log a warning and continue
    LogWarning,
}

/// One external command: a program and its arguments.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// One named step bound to a working directory.
///
/// Commands within a step run in order; the first failure abandons the
/// step's remaining commands (a half-initialized git repository must not
/// receive a commit).
#[derive(Debug, Clone)]
pub struct ExternalStep {
    pub name: String,
    pub commands: Vec<ExternalCommand>,
    pub workdir: PathBuf,
    pub policy: FailurePolicy,
}

/// Outcome of a single step, for reporting and tests.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub name: String,
    pub success: bool,
}

/// Builds the step list for a generation run.
///
/// Skip flags drop whole steps; order is install first, then git, since
/// the initial commit should capture any lockfile the install writes.
pub fn build_steps(config: &ProjectConfig, target_dir: &Path) -> Vec<ExternalStep> {
    let mut steps = Vec::new();

    if !config.skip_install {
        steps.push(ExternalStep {
            name: "install dependencies".to_string(),
            commands: vec![ExternalCommand::new("npm", &["ci"])],
            workdir: target_dir.to_path_buf(),
            policy: FailurePolicy::LogError,
        });
    }

    if !config.skip_git {
        steps.push(ExternalStep {
            name: "initialize git repository".to_string(),
            commands: vec![
                ExternalCommand::new("git", &["init"]),
                ExternalCommand::new("git", &["add", "."]),
                ExternalCommand::new("git", &["commit", "-m", "Initial Commit"]),
            ],
            workdir: target_dir.to_path_buf(),
            policy: FailurePolicy::LogWarning,
        });
    }

    steps
}

/// Runs a command with inherited stdio, failing on non-zero exit.
fn run_command(command: &ExternalCommand, workdir: &Path) -> std::result::Result<(), String> {
    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(workdir)
        .status()
        .map_err(|e| format!("could not run '{}': {}", command.display(), e))?;

    if !status.success() {
        return Err(format!("'{}' exited with {}", command.display(), status));
    }
    Ok(())
}

/// Executes steps strictly sequentially, never in parallel.
///
/// Commands inherit stdin/stdout/stderr for transparency and are otherwise
/// fire-and-wait. A failing step marked `Fatal` aborts the run; any other
/// failure is logged at the step's level and the runner moves on to the
/// next step.
///
/// # Errors
/// * `Error::CommandError` when a step with `FailurePolicy::Fatal` fails
pub fn run_steps(steps: &[ExternalStep]) -> Result<Vec<StepReport>> {
    let mut reports = Vec::with_capacity(steps.len());

    for step in steps {
        let mut failure = None;
        for command in &step.commands {
            if let Err(reason) = run_command(command, &step.workdir) {
                failure = Some(reason);
                break;
            }
        }

        match failure {
            None => reports.push(StepReport { name: step.name.clone(), success: true }),
            Some(reason) => {
                match step.policy {
                    FailurePolicy::Fatal => {
                        return Err(Error::CommandError { name: step.name.clone(), reason });
                    }
                    FailurePolicy::LogError => {
                        error!("Step '{}' failed: {}", step.name, reason);
                    }
                    FailurePolicy::LogWarning => {
                        warn!("Step '{}' failed: {}", step.name, reason);
                    }
                }
                reports.push(StepReport { name: step.name.clone(), success: false });
            }
        }
    }

    Ok(reports)
}
