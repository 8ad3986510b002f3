/// Kind of the only records the report lists at top level.
pub const ROOT_KIND: &str = "DATABASE";

/// One parsed line of a schema listing.
///
/// Every field is kept as the raw (whitespace-stripped) text of its column.
/// An empty string means the column was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatRecord {
    /// Upper-cased discriminator, e.g. `DATABASE`, `TABLE`, `COLUMN`.
    pub kind: String,
    pub name: String,
    pub schema: String,
    pub parent_name: String,
    pub parent_type: String,
    /// Only meaningful for leaf records such as columns.
    pub data_type: String,
    /// `"1"` means nullable, anything else does not.
    pub is_nullable: String,
}

impl FlatRecord {
    /// Identity used when resolving parent references: `(kind, name)`.
    pub fn key(&self) -> (&str, &str) {
        (self.kind.as_str(), self.name.as_str())
    }

    /// The `(kind, name)` identity this record declares as its parent.
    pub fn parent_key(&self) -> (&str, &str) {
        (self.parent_type.as_str(), self.parent_name.as_str())
    }

    pub fn accepts_nulls(&self) -> bool {
        self.is_nullable == "1"
    }

    pub fn is_root_kind(&self) -> bool {
        self.kind == ROOT_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(is_nullable: &str) -> FlatRecord {
        FlatRecord {
            kind: "COLUMN".into(),
            name: "C1".into(),
            parent_name: "T1".into(),
            parent_type: "TABLE".into(),
            data_type: "int".into(),
            is_nullable: is_nullable.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keys() {
        let c = column("1");
        assert_eq!(c.key(), ("COLUMN", "C1"));
        assert_eq!(c.parent_key(), ("TABLE", "T1"));
    }

    #[test]
    fn test_nullable_only_literal_one() {
        assert!(column("1").accepts_nulls());
        for value in ["0", "", "true", "yes", "01"] {
            assert!(!column(value).accepts_nulls(), "{value:?}");
        }
    }

    #[test]
    fn test_root_kind() {
        let db = FlatRecord {
            kind: "DATABASE".into(),
            name: "DB1".into(),
            ..Default::default()
        };
        assert!(db.is_root_kind());
        assert!(!column("1").is_root_kind());
    }
}
