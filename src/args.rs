use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::distance::Metric;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct LinalgArgs {
    /// Operation to run on the JSON request.
    #[arg(value_enum)]
    pub op: Operation,

    /// JSON request file. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Path to a TOML config file (defaults to ./config.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Distance function, e.g. `dist_norm2` or `linalg.squared_dist_norm1`.
    #[arg(long)]
    pub metric: Option<Metric>,

    /// Number of columns returned by `closest-columns`.
    #[arg(long, default_value_t = 1)]
    pub top: usize,

    /// Worker threads for `batch`; overrides the config file.
    #[arg(long)]
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Norm1,
    Norm2,
    NormInf,
    Dist,
    ClosestColumn,
    ClosestColumns,
    Batch,
}
