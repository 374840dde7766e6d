pub mod error;
pub mod field;
pub mod finding;
pub mod numeric;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use field::{FieldDescriptor, FieldKey, all_fields};
pub use finding::{Severity, ValidationFinding, ValidationReport};
pub use numeric::parse_leading_int;
pub use record::{AssetStatus, DEFAULT_CIA_SCORE, FieldValue, ImportedRecord};
pub use table::{ColumnProfile, RawTable, SAMPLE_ROWS, cell, mapped_columns};
