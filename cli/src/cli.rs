use std::path::PathBuf;

use edumap::{DEFAULT_EDUCATION_URL, DEFAULT_TOPOLOGY_URL};

/// County educational attainment choropleth CLI
#[derive(clap::Parser, Debug)]
#[command(name = "edumap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fetch both documents and write the map as SVG or HTML
    Render(RenderArgs),

    /// Fetch both documents and print a join summary
    Inspect(SourceArgs),
}

/// Where to read the two input documents from.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// County topology (TopoJSON): URL or local path
    #[arg(long, default_value = DEFAULT_TOPOLOGY_URL)]
    pub topology: String,

    /// Education records (JSON array): URL or local path
    #[arg(long, default_value = DEFAULT_EDUCATION_URL)]
    pub education: String,

    /// Topology object holding the regions
    #[arg(long, default_value = "counties")]
    pub object: String,

    /// HTTP timeout in seconds (waits indefinitely if omitted)
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum VariantArg { Fixed, Responsive }

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum FormatArg { Svg, Html }

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum ProjectionArg { Identity, Fit }

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Output format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Fixed 960x600 surface or viewport-responsive layout
    #[arg(long, value_enum, default_value_t = VariantArg::Fixed)]
    pub variant: VariantArg,

    /// Coordinate handling: pre-projected pixels or fit lon/lat to the surface
    #[arg(long, value_enum, default_value_t = ProjectionArg::Identity)]
    pub projection: ProjectionArg,

    /// Draw shared borders between regions
    #[arg(long)]
    pub mesh: bool,

    /// Fill for regions without an education record (#rrggbb)
    #[arg(long, default_value = "#cccccc")]
    pub missing_color: String,

    /// Overwrite if the output file exists
    #[arg(long)]
    pub force: bool,
}
