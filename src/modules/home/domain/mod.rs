/// How many titles the landing carousel asks for.
pub const FEATURED_COUNT: u32 = 20;

/// Media types offered by the advanced search panel.
pub const TYPE_OPTIONS: [&str; 5] = ["TV", "Movie", "OVA", "ONA", "Special"];

/// Years offered by the advanced search dropdown, newest first. Goes one
/// year past the current one to cover announced titles.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (1960..=current_year + 1).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_options_run_newest_first_down_to_1960() {
        let years = year_options(2026);
        assert_eq!(years.first(), Some(&2027));
        assert_eq!(years.last(), Some(&1960));
        assert_eq!(years.len(), 68);
    }
}
