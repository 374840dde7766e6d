use asset_model::FieldKey;

/// Substring patterns per field, in lookup order.
///
/// A header maps to the first field whose list has a pattern contained in
/// the lower-cased header.
pub const FIELD_PATTERNS: &[(FieldKey, &[&str])] = &[
    (
        FieldKey::Name,
        &[
            "name",
            "asset_name",
            "assetname",
            "title",
            "device_name",
            "system_name",
        ],
    ),
    (
        FieldKey::AssetType,
        &["type", "asset_type", "assettype", "category", "kind"],
    ),
    (
        FieldKey::Owner,
        &["owner", "asset_owner", "responsible", "custodian", "contact"],
    ),
    (
        FieldKey::Classification,
        &["classification", "class", "sensitivity", "security_level"],
    ),
    (
        FieldKey::Description,
        &["description", "desc", "details", "notes", "summary"],
    ),
    (
        FieldKey::Department,
        &["department", "dept", "division", "business_unit", "team"],
    ),
    (
        FieldKey::Vendor,
        &["vendor", "provider", "supplier", "manufacturer"],
    ),
    (
        FieldKey::AcquisitionDate,
        &["acquisition", "purchase", "acquired", "date"],
    ),
    (FieldKey::Confidentiality, &["confidentiality", "conf"]),
    (FieldKey::Integrity, &["integrity", "integ"]),
    (FieldKey::Availability, &["availability", "avail"]),
    (
        FieldKey::Location,
        &["location", "site", "datacenter", "data_center", "building"],
    ),
    (
        FieldKey::SerialNumber,
        &["serial", "serial_number", "s/n", "asset_tag"],
    ),
    (FieldKey::Tags, &["tags", "tag", "labels", "keywords"]),
];

/// Patterns registered for one field.
pub fn patterns_for(field: FieldKey) -> &'static [&'static str] {
    FIELD_PATTERNS
        .iter()
        .find(|(key, _)| *key == field)
        .map_or(&[], |(_, patterns)| patterns)
}
