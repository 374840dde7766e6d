//! `--map COLUMN=FIELD` arguments.

use std::fmt;

use asset_model::FieldKey;

/// Values of FIELD meaning "don't import this column".
const SKIP_VALUES: [&str; 3] = ["none", "skip", "-"];

/// A manual mapping given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOverride {
    pub column: String,
    pub field: Option<FieldKey>,
}

impl fmt::Display for MappingOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}={}", self.column, field),
            None => write!(f, "{}=none", self.column),
        }
    }
}

/// Parses `COLUMN=FIELD`. The split is at the last `=`, so column headers
/// may themselves contain `=`.
pub fn parse_mapping_override(raw: &str) -> Result<MappingOverride, String> {
    let (column, field) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected COLUMN=FIELD, got '{raw}'"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in '{raw}'"));
    }
    let field = field.trim();
    let field = if SKIP_VALUES.iter().any(|v| v.eq_ignore_ascii_case(field)) {
        None
    } else {
        Some(field.parse::<FieldKey>().map_err(|err| {
            let known: Vec<&str> = FieldKey::ALL.iter().map(|f| f.key()).collect();
            format!("{err} (expected one of: {}, none)", known.join(", "))
        })?)
    };
    Ok(MappingOverride {
        column: column.to_string(),
        field,
    })
}
