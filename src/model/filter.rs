use crate::catalog::CatalogError;
use crate::model::HomestayUnit;

/// Search predicates over homestay units. Every criterion is optional; an absent one
/// always matches, and present ones are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the unit name.
    pub name: Option<String>,
    /// Case-insensitive substring of the address.
    pub address: Option<String>,
    /// Exact price.
    pub price: Option<u64>,
    /// Exact number of rooms.
    pub room_count: Option<u32>,
}

impl FilterCriteria {
    /// Criteria that match every unit.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_room_count(mut self, room_count: u32) -> Self {
        self.room_count = Some(room_count);
        self
    }

    /// Builds criteria from the raw text of the four search inputs.
    ///
    /// Blank inputs are treated as absent. A price or room count that is not a
    /// non-negative integer is rejected.
    pub fn from_inputs(name: &str, price: &str, address: &str, room_count: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            name: non_blank(name),
            address: non_blank(address),
            price: parse_number(price, "price")?,
            room_count: parse_number(room_count, "room count")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            && self.address.as_deref().map_or(true, str::is_empty)
            && self.price.is_none()
            && self.room_count.is_none()
    }

    pub fn matches(&self, unit: &HomestayUnit) -> bool {
        contains_ignore_case(&unit.name, self.name.as_deref())
            && contains_ignore_case(&unit.address, self.address.as_deref())
            && self.price.map_or(true, |price| unit.price == price)
            && self.room_count.map_or(true, |rooms| unit.room_count == rooms)
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number<N: std::str::FromStr>(input: &str, field: &str) -> Result<Option<N>, CatalogError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| CatalogError::Validation(format!("{field} must be a whole number, got {trimmed:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HomestayId;

    fn riverside() -> HomestayUnit {
        HomestayUnit::new(HomestayId(3), "Riverside Nest", 750000, "78 Nguyen Du St, Hoi An", 2)
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        assert!(FilterCriteria::any().matches(&riverside()));
        assert!(FilterCriteria::any().with_name("").matches(&riverside()));
    }

    #[test]
    fn test_text_criteria_are_case_insensitive_substrings() {
        let unit = riverside();
        assert!(FilterCriteria::any().with_name("river").matches(&unit));
        assert!(FilterCriteria::any().with_address("HOI AN").matches(&unit));
        assert!(!FilterCriteria::any().with_name("villa").matches(&unit));
    }

    #[test]
    fn test_numeric_criteria_are_exact_and_combined_with_and() {
        let unit = riverside();
        assert!(FilterCriteria::any().with_price(750000).with_room_count(2).matches(&unit));
        assert!(!FilterCriteria::any().with_price(750000).with_room_count(3).matches(&unit));
        assert!(!FilterCriteria::any().with_price(75000).matches(&unit));
    }

    #[test]
    fn test_from_inputs() {
        let criteria = FilterCriteria::from_inputs(" nest ", "750000", "", " ").unwrap();
        assert_eq!(criteria, FilterCriteria::any().with_name("nest").with_price(750000));

        assert!(FilterCriteria::from_inputs("", "", "", "").unwrap().is_empty());
        assert!(matches!(
            FilterCriteria::from_inputs("", "cheap", "", ""),
            Err(CatalogError::Validation(_))
        ));
        assert!(FilterCriteria::from_inputs("", "", "", "-1").is_err());
    }
}
