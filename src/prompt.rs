//! User input and interaction handling.
//! Collects configuration fields not already supplied via flags through
//! dialoguer prompts, each with a default and a validator, and asks for
//! the final go-ahead before the filesystem is touched.

use dialoguer::{Confirm, Input};
use std::path::Path;

use crate::cli::Args;
use crate::config::{
    validate_domain_name, validate_domain_port, validate_project_name, ProjectConfig,
};
use crate::error::{Error, Result};

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::PromptError(e.to_string())
}

fn prompt_output_folder() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Where should we create your project? (leave blank for current directory)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    Ok(if input.trim().is_empty() { None } else { Some(input) })
}

fn prompt_project_name() -> Result<String> {
    Input::new()
        .with_prompt("What's the name of your project?")
        .default("my-app".to_string())
        .validate_with(|input: &String| validate_project_name(input))
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_domain_name(default: &str) -> Result<String> {
    Input::new()
        .with_prompt("What's the domain/business area for this app? (e.g. Finance, HR, Inventory)")
        .default(default.to_string())
        .validate_with(|input: &String| validate_domain_name(input))
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_domain_port() -> Result<String> {
    Input::new()
        .with_prompt("Which port would you like to use for development? (1024-65535)")
        .default("3000".to_string())
        .validate_with(|input: &String| validate_domain_port(input).map(|_| ()))
        .interact_text()
        .map_err(prompt_error)
}

/// Resolves the full configuration from flags and, where required fields
/// are missing, interactive prompts.
///
/// Interactive mode engages only when one of {project name, domain name,
/// domain port} is absent, and then asks for the missing subset only; the
/// optional output folder is asked as part of that session. Fully
/// flag-driven invocations never prompt here. Flag values go through the
/// same validators as prompt answers, in one pass, when the config record
/// is built.
pub fn resolve_config(args: &Args) -> Result<ProjectConfig> {
    let interactive =
        args.project_name.is_none() || args.domain_name.is_none() || args.domain_port.is_none();

    if interactive {
        println!("Let's create your new application!\n");
    }

    let output_folder = match &args.output_folder {
        Some(folder) => Some(folder.clone()),
        None if interactive => prompt_output_folder()?,
        None => None,
    };
    let project_name = match &args.project_name {
        Some(name) => name.clone(),
        None => prompt_project_name()?,
    };
    let domain_name = match &args.domain_name {
        Some(name) => name.clone(),
        None => prompt_domain_name(&project_name)?,
    };
    let domain_port = match &args.domain_port {
        Some(port) => port.clone(),
        None => prompt_domain_port()?,
    };

    ProjectConfig::new(
        output_folder,
        project_name,
        domain_name,
        &domain_port,
        args.skip_install,
        args.skip_git,
    )
}

/// Prints the generation summary and asks for explicit confirmation.
///
/// Returns `Ok(false)` when the user declines; the caller exits cleanly
/// with no side effects.
pub fn confirm_generation(config: &ProjectConfig, target_dir: &Path) -> Result<bool> {
    println!("\nProject creation summary");
    println!("  Location:     {}", target_dir.display());
    println!("  Project name: {}", config.project_name);
    println!("  Domain:       {}", config.domain_name);
    println!("  URL path:     /{}", config.domain_slug());
    println!("  Port:         {}\n", config.domain_port);

    Confirm::new()
        .with_prompt("Ready to create the project?")
        .default(true)
        .interact()
        .map_err(prompt_error)
}
