//! Fixed column policy for the passenger dataset.
//!
//! These names are policy, not schema introspection: the table exclusion list
//! and the curated categorical list stay the same even if the loaded file adds
//! or drops unrelated columns.

/// Passenger identifier.
pub const ID_COLUMN: &str = "PassengerId";

/// Cabin code (deck/number/side).
pub const CABIN_COLUMN: &str = "Cabin";

/// Free-text passenger name.
pub const NAME_COLUMN: &str = "Name";

/// Outcome column, stored as 0/1 after load.
pub const OUTCOME_COLUMN: &str = "Transported";

/// Column used to color and stack the outcome chart.
pub const GROUP_COLUMN: &str = "HomePlanet";

/// Columns never shown in the dataset table or offered as scatter axes.
pub const EXCLUDED_COLUMNS: [&str; 3] = [ID_COLUMN, CABIN_COLUMN, NAME_COLUMN];

/// Columns offered on the categorical breakdown page.
pub const CATEGORICAL_COLUMNS: [&str; 4] = ["HomePlanet", "CryoSleep", "Destination", "VIP"];

/// Preferred default for the distribution selector.
pub const DEFAULT_DISTRIBUTION_COLUMN: &str = "Age";

/// Preferred default for the scatter x axis.
pub const DEFAULT_RELATIONSHIP_X: &str = "Age";

/// Preferred default for the scatter y axis.
pub const DEFAULT_RELATIONSHIP_Y: &str = "FoodCourt";

/// Preferred default for the categorical selector.
pub const DEFAULT_CATEGORY: &str = "HomePlanet";

/// Rows per page in the dataset table.
pub const TABLE_PAGE_SIZE: usize = 10;

/// Returns true if the column is on the fixed exclusion list.
pub fn is_excluded(column: &str) -> bool {
    EXCLUDED_COLUMNS.contains(&column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_list_is_fixed() {
        assert!(is_excluded("PassengerId"));
        assert!(is_excluded("Cabin"));
        assert!(is_excluded("Name"));
        assert!(!is_excluded("Age"));
        assert!(!is_excluded("name"));
    }
}
