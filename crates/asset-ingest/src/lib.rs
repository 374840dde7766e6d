pub mod csv_table;
pub mod error;
pub mod reader;
pub mod template;

pub use csv_table::{build_column_profiles, parse_csv_line, parse_csv_text};
pub use error::{IngestError, Result};
pub use reader::{ADVISORY_MAX_FILE_BYTES, read_import_table, read_import_text};
pub use template::{TEMPLATE_FILE_NAME, TEMPLATE_HEADERS, template_csv, write_template};
