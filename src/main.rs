use anyhow::Result;
use assetlink::commands;
use assetlink::config::Config;
use assetlink::report::ConsoleReporter;
use clap::Parser;
use std::path::PathBuf;

/// assetlink - Asset namespace linker
///
/// Links the asset directories that installed packages publish into the
/// target directories the project declares, using symbolic links.
///
/// The project manifest maps namespaces to target directories below
/// "extra" -> "octris/assets" -> "target", and every package maps the same
/// namespaces to its own asset directories below "source".
///
/// Examples:
///   assetlink install acme/widgets              # Link assets of an installed package
///   assetlink update acme/widgets --from old.json
///   assetlink cleanup                           # Remove dangling links
#[derive(Parser, Debug)]
#[command(author, version = env!("ASSETLINK_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory holding the root manifest (also via ASSETLINK_PROJECT)
    #[arg(
        long = "project",
        short = 'p',
        env = "ASSETLINK_PROJECT",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub project: PathBuf,

    /// Manifest file name of the project and of every package (defaults to composer.json)
    #[arg(long, value_name = "NAME", global = true)]
    pub manifest: Option<String>,

    /// Key below "extra" holding the asset configuration (defaults to octris/assets)
    #[arg(long = "extra-key", value_name = "KEY", global = true)]
    pub extra_key: Option<String>,

    /// Directory packages are installed into, relative to the project (defaults to vendor)
    #[arg(long = "vendor-dir", value_name = "DIR", global = true)]
    pub vendor_dir: Option<PathBuf>,

    /// Do not remove dangling links after the command
    #[arg(long = "no-cleanup", global = true)]
    pub no_cleanup: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Link the assets of installed packages
    Install(InstallArgs),

    /// Relink a package after it was updated
    Update(UpdateArgs),

    /// Remove the links of a package
    Uninstall(UninstallArgs),

    /// Remove dangling links and empty directories from the target directories
    Cleanup,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Package names in the format "vendor/name"
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Package name in the format "vendor/name"
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Manifest of the previously installed version
    #[arg(long, value_name = "MANIFEST")]
    pub from: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct UninstallArgs {
    /// Package name in the format "vendor/name"
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Manifest of the removed package (defaults to the installed one)
    #[arg(long, value_name = "MANIFEST")]
    pub from: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = assetlink::runtime::RealRuntime;
    let reporter = ConsoleReporter;

    let config = Config::new(
        &runtime,
        &cli.project,
        cli.manifest,
        cli.extra_key,
        cli.vendor_dir,
    )?;
    let sweep = !cli.no_cleanup;

    match cli.command {
        Commands::Install(args) => commands::install(runtime, reporter, &config, &args.names, sweep)?,
        Commands::Update(args) => {
            commands::update(runtime, reporter, &config, &args.name, &args.from, sweep)?
        }
        Commands::Uninstall(args) => {
            commands::uninstall(runtime, reporter, &config, &args.name, args.from, sweep)?
        }
        Commands::Cleanup => commands::cleanup(runtime, reporter, &config)?,
    }
    Ok(())
}
