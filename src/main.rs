use clap::Parser;
use mipgen::context::RunContext;
use mipgen::manifest::AppManifest;
use mipgen::pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mipgen")]
#[command(about = "Generate Android icon resources from an app manifest")]
#[command(long_about = "\
Generate Android icon resources from an app manifest

Reads the icon fields of an app manifest and populates an Android res/
directory: the legacy launcher icon (mipmap-<dpi>/ic_launcher.png), adaptive
foreground and background layers (mipmap-<dpi>-v26/), the notification icon
(drawable-<dpi>/), and the XML binding for the adaptive background.

By default the run is best-effort: on a machine without the platform resize
tool, full-size copies are kept and a warning is printed. With --strict any
platform limitation is fatal, and the manifest is expected to carry hosted
image URLs instead of local paths (build-service behavior).")]
#[command(version)]
struct Cli {
    /// App manifest file
    #[arg(long, default_value = "app.json")]
    manifest: PathBuf,

    /// Android resource directory to populate
    #[arg(long, default_value = "android/app/src/main/res")]
    res: PathBuf,

    /// Project root for resolving manifest-relative image paths
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Fail on platform limitations instead of degrading (build-service mode;
    /// expects a hosted manifest with image URLs)
    #[arg(long)]
    strict: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.manifest)?;
    let manifest: AppManifest = serde_json::from_str(&raw)?;

    let context = if cli.strict {
        RunContext::Service
    } else {
        RunContext::Detached {
            project_root: cli.project_root,
        }
    };

    pipeline::write_icons(&manifest, &context, &cli.res)?;
    println!("Icon resources written to {}", cli.res.display());
    Ok(())
}
