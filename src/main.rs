use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use changelog_extract::cli::orchestration::{self, WorkflowOutcome};
use changelog_extract::config::{self, ReleaseSettings};
use changelog_extract::ui;

#[derive(clap::Parser)]
#[command(
    name = "changelog-extract",
    version,
    about = "Extract the changelog section of a release into release notes"
)]
struct Args {
    #[arg(long, help = "Print the release notes instead of writing them")]
    dry_run: bool,

    #[arg(
        long,
        help = "Release ref (e.g. refs/tags/v1.2.3); defaults to $VERSION"
    )]
    tag: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Repository root directory")]
    root: PathBuf,

    #[arg(long, help = "List versions found in the changelog and exit")]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.list {
        let config = config::load_config(args.config.as_deref())?;
        let versions = orchestration::list_versions(&args.root, &config)?;
        ui::display_versions(&versions);
        return Ok(());
    }

    // Validate the release ref before touching any file
    let settings = ReleaseSettings::resolve(args.tag.as_deref(), args.dry_run, args.root)?;
    let config = config::load_config(args.config.as_deref())?;

    ui::display_status(&format!(
        "Extracting changelog for version {}",
        settings.tag
    ));
    let result = orchestration::run_extract_workflow(&settings, &config)?;
    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    match result.outcome {
        WorkflowOutcome::Printed { content } => {
            println!("{}", content);
        }
        WorkflowOutcome::Written { path, .. } => {
            ui::display_success(&format!(
                "Wrote release notes for {} to {}",
                settings.tag,
                path.display()
            ));
        }
    }

    Ok(())
}
