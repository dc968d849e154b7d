//! renewals-dash: terminal dashboard for policy renewals
//!
//! Interactive views of collections, branch performance, product mix,
//! channels, regions and concerning cases, plus scriptable summary and
//! export commands.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use renewals_dash::{
    cli::{self, DashboardOptions, ExportRequest, SummaryFormat},
    config::{load_or_default, AppConfig, ConfigPreset},
    model::{DateRange, FilterField, FilterSelection},
    reports::{ExportFormat, ExportScope},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "renewals-dash")]
#[command(version)]
#[command(about = "Terminal dashboard for policy renewals", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Error occurred

EXAMPLES:
    # Open the dashboard on the concerning cases view
    renewals-dash dashboard --view concerning

    # Headline numbers for a script
    renewals-dash summary -o json

    # Concerning cases in the South region as CSV
    renewals-dash export --view concerning -f csv --region South

    # Load a dataset exported earlier
    renewals-dash --data snapshot.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON data file to load instead of the built-in sample data
    #[arg(long, global = true, env = "RENEWALS_DASH_DATA")]
    data: Option<PathBuf>,

    /// Start from a named preset (default, presentation, analyst)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Filter flags shared by `summary` and `export`
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Region to include
    #[arg(long)]
    region: Option<String>,

    /// Branch code to include
    #[arg(long)]
    branch: Option<String>,

    /// Product to include
    #[arg(long)]
    product: Option<String>,

    /// Sales channel to include
    #[arg(long)]
    channel: Option<String>,

    /// Payment mechanism to include
    #[arg(long)]
    payment_mechanism: Option<String>,

    /// First due month (2025-06 or JUN-25)
    #[arg(long, value_parser = cli::parse_month_arg)]
    from: Option<NaiveDate>,

    /// Last due month (2025-08 or AUG-25)
    #[arg(long, value_parser = cli::parse_month_arg)]
    to: Option<NaiveDate>,

    /// Free-text search over policy, branch and customer
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    /// Apply the given flags on top of `base`.
    fn apply(self, base: &FilterSelection) -> FilterSelection {
        let mut filters = base.clone();
        let fields = [
            (FilterField::Region, self.region),
            (FilterField::Branch, self.branch),
            (FilterField::Product, self.product),
            (FilterField::Channel, self.channel),
            (FilterField::PaymentMechanism, self.payment_mechanism),
            (FilterField::Search, self.search),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                filters = filters.update(field, value);
            }
        }
        if self.from.is_some() || self.to.is_some() {
            filters = filters.with_date_range(DateRange {
                from: self.from.or(base.date_range.from),
                to: self.to.or(base.date_range.to),
            });
        }
        filters
    }
}

/// Arguments for the `dashboard` subcommand
#[derive(Args, Debug, Default)]
struct DashboardArgs {
    /// View to open (overview, branch, product, concerning, channel, regional)
    #[arg(long)]
    view: Option<String>,

    /// Reopen the view that was active when the dashboard last closed
    #[arg(long, conflicts_with = "view")]
    resume: bool,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Theme override (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,
}

/// Arguments for the `summary` subcommand
#[derive(Args, Debug)]
struct SummaryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: SummaryFormat,

    #[command(flatten)]
    filters: FilterArgs,
}

/// Arguments for the `export` subcommand
#[derive(Args, Debug)]
struct ExportArgs {
    /// What to export: a view tag, `renewals` or `all`
    #[arg(long, default_value = "overview")]
    view: ExportScope,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard(DashboardArgs),

    /// Print headline KPIs and insights
    Summary(SummaryArgs),

    /// Export a view's table as JSON, CSV or Markdown
    Export(ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .renewals-dash.yaml in the current directory
    Init,
}

fn init_logging(cli: &Cli, interactive: bool) {
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else if interactive {
        // Log lines would tear through the alternate screen.
        "warn"
    } else {
        "info"
    };
    let ansi = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(io::stderr),
        )
        .init();
}

/// Preset, then config file, then global CLI flags.
fn effective_config(cli: &Cli) -> Result<AppConfig> {
    let (file_config, loaded_from) = load_or_default(cli.config.as_deref());
    let mut config = match &cli.preset {
        Some(name) => {
            let preset = ConfigPreset::from_name(name).with_context(|| {
                let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                format!("unknown preset '{name}' (valid: {})", valid.join(", "))
            })?;
            let mut base = AppConfig::from_preset(preset);
            base.merge(&file_config);
            base
        }
        None => file_config,
    };
    if let Some(path) = &loaded_from {
        tracing::debug!("using config file {}", path.display());
    }
    if cli.data.is_some() {
        config.data.source.clone_from(&cli.data);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Dashboard(_)));
    init_logging(&cli, interactive);

    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Dashboard(DashboardArgs::default()));
    let exit_code = run(&cli, command)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn run(cli: &Cli, command: Commands) -> Result<i32> {
    match command {
        Commands::Dashboard(args) => {
            let mut config = effective_config(cli)?;
            if args.no_mouse {
                config.tui.mouse_enabled = false;
            }
            let options = DashboardOptions {
                view: args.view,
                resume: args.resume,
                theme: args.theme,
            };
            cli::run_dashboard(&config, &options)
        }

        Commands::Summary(args) => {
            let config = effective_config(cli)?;
            let data = cli::load_data(&config)?;
            let filters = args.filters.apply(&config.filters);
            cli::run_summary(&data, &filters, args.output, &mut io::stdout().lock())
        }

        Commands::Export(args) => {
            let config = effective_config(cli)?;
            let data = cli::load_data(&config)?;
            let request = ExportRequest {
                scope: args.view,
                format: args.format.unwrap_or(config.export.format),
                output: args.output_file,
                filters: args.filters.apply(&config.filters),
            };
            cli::run_export(&data, &request, &mut io::stdout().lock())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "renewals-dash", &mut io::stdout());
            Ok(0)
        }

        Commands::ConfigSchema { output } => {
            let schema = renewals_dash::config::generate_json_schema()
                .context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(0)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                cli::run_config_show(cli.config.as_deref(), &mut io::stdout().lock())
            }
            ConfigAction::Path => {
                cli::run_config_path(cli.config.as_deref(), &mut io::stdout().lock())
            }
            ConfigAction::Init => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                cli::run_config_init(&cwd)
            }
        },
    }
}
