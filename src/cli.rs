use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shape-area",
    version,
    about = "Compute rectangle and circle areas from a batch of queries"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Read queries from a file instead of stdin"
    )]
    pub input: Option<PathBuf>,
}
