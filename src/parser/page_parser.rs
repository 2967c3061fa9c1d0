use super::sort_parser::SortSpec;

/// Slice of a listing requested by the client: a zero-based page index, a
/// page size and an ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: Vec<SortSpec>,
}

impl PageRequest {
    pub fn new(page: i64, size: i64, sort: Vec<SortSpec>) -> Self {
        Self { page, size, sort }
    }

    pub fn of_size(size: i64) -> Self {
        Self::new(0, size, Vec::new())
    }

    /// Build a request from raw `page`, `size` and repeated `sort` query pairs.
    ///
    /// Out-of-range or unparseable values fall back instead of failing:
    /// a bad page becomes 0, a bad size becomes `default_size`, and a size
    /// above `max_size` is clamped. Page indexes are 32-bit, so anything past
    /// `i32::MAX` counts as bad.
    pub fn from_query(params: &[(String, String)], default_size: i64, max_size: i64) -> Self {
        let mut page = 0;
        let mut size = default_size;
        let mut sort = Vec::new();

        for (key, value) in params {
            match key.as_str() {
                "page" => {
                    page = value
                        .trim()
                        .parse::<i32>()
                        .ok()
                        .filter(|p| *p >= 0)
                        .map_or(0, i64::from);
                }
                "size" => {
                    size = value
                        .trim()
                        .parse::<i64>()
                        .ok()
                        .filter(|s| *s >= 1)
                        .unwrap_or(default_size)
                        .min(max_size);
                }
                "sort" => sort.extend(SortSpec::from_param(value)),
                _ => {}
            }
        }

        Self { page, size, sort }
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}
