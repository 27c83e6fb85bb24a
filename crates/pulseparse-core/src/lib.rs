//! pulseparse-core: Column value parsing and item transformation.
//!
//! This crate provides:
//! - `ColumnType`: Declared column types resolved from their string tags
//! - `parse`: Decodes a raw column value into a per-type record
//! - `select`: Derives the flat "mappable" value for a column
//! - `Transformer`: Assembles normalized items from raw board exports

pub mod clock;
pub mod column;
pub mod error;
pub mod item;
pub mod mappable;
pub mod transform;
pub mod value;

pub use clock::{Clock, FixedClock, SystemClock};
pub use column::{ColumnType, DEFAULT_COLOR};
pub use error::{CoreError, ParseError, Result};
pub use item::{
    Board, ColumnMeta, EnrichedColumnValue, Envelope, Group, RawColumnValue, RawItem,
    TransformedItem,
};
pub use mappable::select;
pub use transform::{transform_items, transform_json, Transformer};
pub use value::{parse, try_parse, ParsedValue};
