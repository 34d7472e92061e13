use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("hcore error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    if let cli::Commands::Schema(args) = &cli.command {
        init_tracing(flags.quiet, flags.verbose, "warn")?;
        ui::init(&flags);
        return commands::schema::handle(args, &hc_schema::SchemaRegistry::new(), &flags);
    }

    let config = bootstrap::load_config()?;
    init_tracing(flags.quiet, flags.verbose, &config.general.log_level)?;
    ui::init(&flags);
    context::warn_unconfigured(&config);

    let catalog_override = flags.catalog.as_deref().map(std::path::Path::new);
    let ctx = context::AppContext::init(config, catalog_override)?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HEALTHCORE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
