//! Stamp's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration resolution, and
//! coordinates the generation pipeline.

use stamp::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::generate,
    logger::init_logger,
    paths::resolve_target_dir,
    prompt::{confirm_generation, resolve_config},
    template::locate_template_dir,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates the template directory
/// 2. Resolves and validates the project configuration (flags + prompts)
/// 3. Resolves the target directory
/// 4. Shows the summary and asks for confirmation
/// 5. Runs the generation pipeline
fn run(args: Args) -> Result<()> {
    let template_dir = locate_template_dir(args.template_dir.as_deref())?;
    let skip_confirm = args.yes;
    let config = resolve_config(&args)?;
    let target_dir = resolve_target_dir(config.output_folder.as_deref(), &config.project_name)?;

    if !skip_confirm && !confirm_generation(&config, &target_dir)? {
        println!("Project creation cancelled.");
        return Ok(());
    }

    let reports = generate(&config, &template_dir, &target_dir)?;
    for report in &reports {
        if !report.success {
            println!("Note: step '{}' did not complete; you can rerun it manually.", report.name);
        }
    }

    println!("\nProject created at {}", target_dir.display());
    println!("To get started:");
    println!("  cd {}", target_dir.display());
    println!("  npm run dev");
    println!(
        "Your app will be available at http://localhost:{}/{}",
        config.domain_port,
        config.domain_slug()
    );
    Ok(())
}
