use tracing::warn;

/// Customer properties a listing may be ordered by.
pub const SORTABLE_PROPERTIES: [&str; 3] = ["id", "name", "tel"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Recognises a direction token, case-insensitively.
    pub fn parse(s: &str) -> Option<SortOrder> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortOrder::Ascending),
            "desc" | "descending" => Some(SortOrder::Descending),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub attribute: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(attribute: String, order: SortOrder) -> Self {
        SortSpec { attribute, order }
    }

    /// Parse one `sort` query value of the form `prop[,prop...][,asc|desc]`.
    ///
    /// The direction applies to every property in the value. Properties that
    /// are not sortable are dropped.
    pub fn from_param(value: &str) -> Vec<SortSpec> {
        let mut tokens: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let order = match tokens.last().and_then(|t| SortOrder::parse(t)) {
            Some(order) => {
                tokens.pop();
                order
            }
            None => SortOrder::Ascending,
        };

        tokens
            .into_iter()
            .filter(|attribute| {
                let known = SORTABLE_PROPERTIES.contains(attribute);
                if !known {
                    warn!("Ignoring sort on unknown property '{}'", attribute);
                }
                known
            })
            .map(|attribute| SortSpec::new(attribute.to_string(), order))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse("name"), None);
    }

    #[test]
    fn test_sort_spec_with_direction() {
        let specs = SortSpec::from_param("id,desc");
        assert_eq!(
            specs,
            vec![SortSpec::new("id".to_string(), SortOrder::Descending)]
        );
    }

    #[test]
    fn test_sort_spec_defaults_to_ascending() {
        let specs = SortSpec::from_param("name");
        assert_eq!(
            specs,
            vec![SortSpec::new("name".to_string(), SortOrder::Ascending)]
        );
    }

    #[test]
    fn test_sort_spec_direction_applies_to_all_properties() {
        let specs = SortSpec::from_param("name,tel,DESC");
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|s| s.order == SortOrder::Descending));
        assert_eq!(specs[0].attribute, "name");
        assert_eq!(specs[1].attribute, "tel");
    }

    #[test]
    fn test_sort_spec_drops_unknown_properties() {
        assert!(SortSpec::from_param("createdAt,desc").is_empty());
        assert!(SortSpec::from_param("").is_empty());
        assert!(SortSpec::from_param("desc").is_empty());
    }
}
