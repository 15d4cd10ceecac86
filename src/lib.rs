pub mod args;
pub mod catalog;
pub mod cli;
pub mod config_loader;
pub mod distance;
pub mod models;
pub mod search;
pub mod udf;
pub mod utilities;

pub use distance::{DistanceFunction, Metric};
pub use models::common::{LinalgError, Result};
pub use models::types::{ColumnMatch, ColumnMatches, Matrix};
pub use search::{closest_column, closest_column_batch, closest_columns};
