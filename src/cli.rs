use std::fmt;
use std::fs;
use std::io::{self, Read};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::args::{LinalgArgs, Operation};
use crate::config_loader::{Config, ConfigError};
use crate::distance::{DistanceFunction, Metric};
use crate::models::common::LinalgError;
use crate::models::types::{ColumnMatch, Matrix};
use crate::{search, udf};

/// JSON request read from a file or stdin. Absent fields are host NULLs.
#[derive(Deserialize, Debug, Default)]
pub struct Request {
    pub matrix: Option<Matrix>,
    pub x: Option<Vec<f64>>,
    pub y: Option<Vec<f64>>,
    pub queries: Option<Vec<Vec<f64>>>,
    /// Distance function name; `--metric` takes precedence.
    pub dist: Option<String>,
}

#[derive(Debug)]
pub enum CliError {
    Linalg(LinalgError),
    Config(ConfigError),
    Json(serde_json::Error),
    Io(io::Error),
    ThreadPool(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Linalg(e) => write!(f, "{}", e),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "Malformed JSON request: {}", e),
            CliError::Io(e) => write!(f, "Failed to read request: {}", e),
            CliError::ThreadPool(msg) => write!(f, "Failed to build thread pool: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<LinalgError> for CliError {
    fn from(e: LinalgError) -> Self {
        CliError::Linalg(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

pub fn read_request(args: &LinalgArgs) -> Result<Request, CliError> {
    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn resolve_metric(
    args: &LinalgArgs,
    request: &Request,
    config: &Config,
) -> Result<Metric, CliError> {
    if let Some(metric) = args.metric {
        return Ok(metric);
    }
    match &request.dist {
        Some(name) => Ok(udf::resolve_metric(Some(name.as_str()))?),
        None => Ok(config.search.default_metric),
    }
}

/// Runs one operation and returns its JSON result.
pub fn run(args: &LinalgArgs, request: &Request, config: &Config) -> Result<Value, CliError> {
    let x = request.x.as_deref();
    let m = request.matrix.as_ref();

    let value = match args.op {
        Operation::Norm1 => json!({ "value": udf::norm1(x)? }),
        Operation::Norm2 => json!({ "value": udf::norm2(x)? }),
        Operation::NormInf => json!({ "value": udf::norm_inf(x)? }),
        Operation::Dist => {
            let metric = resolve_metric(args, request, config)?;
            let x = x.ok_or(LinalgError::NullInput("x"))?;
            let y = request.y.as_deref().ok_or(LinalgError::NullInput("y"))?;
            json!({ "dist": metric.name(), "value": metric.calculate(x, y)? })
        }
        Operation::ClosestColumn => {
            let metric = resolve_metric(args, request, config)?;
            let m = m.ok_or(LinalgError::NullInput("matrix"))?;
            let x = x.ok_or(LinalgError::NullInput("x"))?;
            serde_json::to_value(search::closest_column(m, x, &metric)?)?
        }
        Operation::ClosestColumns => {
            let metric = resolve_metric(args, request, config)?;
            let m = m.ok_or(LinalgError::NullInput("matrix"))?;
            let x = x.ok_or(LinalgError::NullInput("x"))?;
            serde_json::to_value(search::closest_columns(m, x, args.top, &metric)?)?
        }
        Operation::Batch => {
            let metric = resolve_metric(args, request, config)?;
            let m = m.ok_or(LinalgError::NullInput("matrix"))?;
            let queries = request
                .queries
                .as_deref()
                .ok_or(LinalgError::NullInput("queries"))?;
            serde_json::to_value(run_batch(m, queries, &metric, args, config)?)?
        }
    };
    Ok(value)
}

fn run_batch(
    m: &Matrix,
    queries: &[Vec<f64>],
    metric: &Metric,
    args: &LinalgArgs,
    config: &Config,
) -> Result<Vec<ColumnMatch>, CliError> {
    if queries.len() < config.search.parallel_threshold {
        log::debug!(
            "{} queries below parallel threshold {}, running sequentially",
            queries.len(),
            config.search.parallel_threshold
        );
        return Ok(queries
            .iter()
            .map(|q| search::closest_column(m, q, metric))
            .collect::<Result<Vec<_>, _>>()?);
    }

    let threads = args.threads.unwrap_or(config.search.threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| CliError::ThreadPool(e.to_string()))?;
    log::info!("running {} queries on {} threads", queries.len(), threads);
    Ok(pool.install(|| search::closest_column_batch(m, queries, metric))?)
}
