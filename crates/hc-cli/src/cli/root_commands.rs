use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compute receptor status for a JSON array of nutrient reports.
    Status(StatusArgs),
    /// Show static info for one receptor by its primary receptor name.
    Receptor(ReceptorArgs),
    /// List all receptors of one body system.
    System(SystemArgs),
    /// Summarize every body system.
    Systems,
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `hcore status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Path to a JSON file of nutrient reports, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,
    /// User id attached to the response.
    #[arg(long)]
    pub user: Option<String>,
}

/// Arguments for `hcore receptor`.
#[derive(Clone, Debug, Args)]
pub struct ReceptorArgs {
    /// Primary receptor name (case-insensitive), e.g. `DMT1`.
    pub name: String,
}

/// Arguments for `hcore system`.
#[derive(Clone, Debug, Args)]
pub struct SystemArgs {
    /// Body system id: intestinal, hepatic, circulatory, cellular.
    pub id: String,
}

/// Arguments for `hcore schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, e.g. `nutrient_reports`.
    #[arg(required_unless_present = "list")]
    pub type_name: Option<String>,
    /// List registered schema names instead.
    #[arg(long)]
    pub list: bool,
}
