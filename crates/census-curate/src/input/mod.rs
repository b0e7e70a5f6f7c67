//! Census Reporter responses and their flattened, row-per-geography form.

mod flatten;
mod labels;
mod raw;
mod response;

pub use flatten::{FlattenOptions, MOE_SUFFIX, flatten};
pub use labels::column_labels;
pub use raw::{RawRow, RawTable};
pub use response::{ApiResponse, ColumnMeta, Geography, Release, TableData, TableMeta};
