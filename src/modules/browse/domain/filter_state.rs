use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::search_request::{SearchRequest, SortBy, SortOrder};
use crate::shared::errors::{AppError, AppResult};

/// One removable slot of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Query,
    Genres,
    Types,
    Years,
    MinScore,
    MaxScore,
    Sort,
}

/// How score and year inputs are treated before a search is submitted.
///
/// `Permissive` forwards whatever the user typed and lets the backend
/// decide, `Strict` rejects the submit with a validation error instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    #[default]
    Permissive,
    Strict,
}

/// An active-filter tag as the results header shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTag {
    pub field: FilterField,
    pub label: String,
}

/// The complete filter form of the browse page.
///
/// Multi-value fields keep insertion order and never hold duplicates.
/// Score bounds stay raw strings so the form can round-trip exactly what
/// the user typed. `sort_by`/`order` always carry a value; whether they
/// count as "active" is a separate question (`has_active_filters`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub genres: Vec<String>,
    pub types: Vec<String>,
    pub years: Vec<String>,
    pub min_score: String,
    pub max_score: String,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

impl FilterState {
    /// Rebuild filter state from a URL query string. Returns the state and
    /// the 1-based page number (`page` parameter, malformed values land on
    /// page 1). Unknown parameters are ignored.
    pub fn hydrate(query: &str) -> (Self, u32) {
        let mut state = Self::default();
        let mut page = 1;

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(raw)
                .map(Cow::into_owned)
                .unwrap_or_default();

            match key {
                "q" => state.search_query = value,
                "genres" => state.genres = split_tokens(&value),
                "types" => state.types = split_tokens(&value),
                "years" => state.years = split_tokens(&value),
                "min_score" => state.min_score = value,
                "max_score" => state.max_score = value,
                "sort_by" => state.sort_by = SortBy::from_param(&value),
                "order" => state.order = SortOrder::from_param(&value),
                "page" => page = value.parse().ok().filter(|p| *p >= 1).unwrap_or(1),
                _ => {}
            }
        }

        (state, page)
    }

    /// Serialize back to a URL query string. Field order is fixed and
    /// empty fields are skipped. Any non-empty serialization carries
    /// `sort_by` and `order` even at their defaults; a pristine form with
    /// the default ordering yields an empty string.
    pub fn serialize(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        let query = self.search_query.trim();
        if !query.is_empty() {
            pairs.push(("q", urlencoding::encode(query).into_owned()));
        }
        for (key, values) in [
            ("genres", &self.genres),
            ("types", &self.types),
            ("years", &self.years),
        ] {
            if !values.is_empty() {
                pairs.push((key, join_tokens(values)));
            }
        }
        if !self.min_score.trim().is_empty() {
            pairs.push(("min_score", urlencoding::encode(self.min_score.trim()).into_owned()));
        }
        if !self.max_score.trim().is_empty() {
            pairs.push(("max_score", urlencoding::encode(self.max_score.trim()).into_owned()));
        }
        let sorted = self.sort_by != SortBy::default() || self.order != SortOrder::default();
        if !pairs.is_empty() || sorted {
            pairs.push(("sort_by", self.sort_by.as_str().to_string()));
            pairs.push(("order", self.order.as_str().to_string()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// True when any filter besides the sort is set.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.trim().is_empty()
            || !self.genres.is_empty()
            || !self.types.is_empty()
            || !self.years.is_empty()
            || !self.min_score.trim().is_empty()
            || !self.max_score.trim().is_empty()
    }

    /// Clear one slot. Removing the sort tag resets both the key and the
    /// direction together.
    pub fn clear_field(&mut self, field: FilterField) {
        match field {
            FilterField::Query => self.search_query.clear(),
            FilterField::Genres => self.genres.clear(),
            FilterField::Types => self.types.clear(),
            FilterField::Years => self.years.clear(),
            FilterField::MinScore => self.min_score.clear(),
            FilterField::MaxScore => self.max_score.clear(),
            FilterField::Sort => {
                self.sort_by = SortBy::default();
                self.order = SortOrder::default();
            }
        }
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Tags shown above the results, one per active slot. The sort tag
    /// appears only when it differs from the default ordering.
    pub fn active_tags(&self) -> Vec<FilterTag> {
        let mut tags = Vec::new();
        let mut push = |field, label: String| tags.push(FilterTag { field, label });

        if !self.search_query.trim().is_empty() {
            push(FilterField::Query, format!("Search: {}", self.search_query.trim()));
        }
        if !self.genres.is_empty() {
            push(FilterField::Genres, format!("Genres: {}", self.genres.join(", ")));
        }
        if !self.types.is_empty() {
            push(FilterField::Types, format!("Types: {}", self.types.join(", ")));
        }
        if !self.years.is_empty() {
            push(FilterField::Years, format!("Years: {}", self.years.join(", ")));
        }
        if !self.min_score.trim().is_empty() {
            push(FilterField::MinScore, format!("Min score: {}", self.min_score.trim()));
        }
        if !self.max_score.trim().is_empty() {
            push(FilterField::MaxScore, format!("Max score: {}", self.max_score.trim()));
        }
        if self.sort_by != SortBy::default() || self.order != SortOrder::default() {
            push(
                FilterField::Sort,
                format!("Sort: {} ({})", self.sort_by.label(), self.order.as_str()),
            );
        }

        tags
    }

    /// Check the form against the given policy. `Permissive` never fails.
    pub fn validate(&self, policy: ValidationPolicy) -> AppResult<()> {
        if policy == ValidationPolicy::Permissive {
            return Ok(());
        }

        let min = parse_score("min_score", &self.min_score)?;
        let max = parse_score("max_score", &self.max_score)?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(AppError::ValidationError(
                    "min_score must not exceed max_score".to_string(),
                ));
            }
        }
        for year in &self.years {
            if year.parse::<i32>().is_err() {
                return Err(AppError::ValidationError(format!(
                    "Invalid year filter: {}",
                    year
                )));
            }
        }

        Ok(())
    }

    /// Build the request the search endpoint expects. The sort parameters
    /// are always sent; everything else only when set.
    pub fn to_search_request(&self, limit: u32, offset: u32) -> SearchRequest {
        SearchRequest {
            q: non_empty(&self.search_query),
            genres: (!self.genres.is_empty()).then(|| self.genres.join(",")),
            types: (!self.types.is_empty()).then(|| self.types.join(",")),
            years: (!self.years.is_empty()).then(|| self.years.join(",")),
            min_score: non_empty(&self.min_score),
            max_score: non_empty(&self.max_score),
            sort_by: self.sort_by,
            order: self.order,
            limit,
            offset,
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_score(field: &str, raw: &str) -> AppResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let score: f64 = trimmed
        .parse()
        .map_err(|_| AppError::ValidationError(format!("Invalid {}: {}", field, trimmed)))?;
    if !(0.0..=10.0).contains(&score) {
        return Err(AppError::ValidationError(format!(
            "{} must be between 0 and 10",
            field
        )));
    }
    Ok(Some(score))
}

fn split_tokens(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in value.split(',') {
        let token = token.trim();
        if !token.is_empty() && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

fn join_tokens(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pristine_form_serializes_to_an_empty_query() {
        assert_eq!(FilterState::default().serialize(), "");
    }

    #[test]
    fn serializes_fields_in_fixed_order() {
        let state = FilterState {
            search_query: "cowboy bebop".to_string(),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            min_score: "7".to_string(),
            order: SortOrder::Asc,
            ..Default::default()
        };

        assert_eq!(
            state.serialize(),
            "q=cowboy%20bebop&genres=Action,Sci-Fi&min_score=7&sort_by=score&order=asc"
        );
    }

    #[test]
    fn filtered_form_carries_the_default_sort() {
        let state = FilterState {
            genres: vec!["Action".to_string(), "Comedy".to_string()],
            min_score: "7".to_string(),
            ..Default::default()
        };

        assert_eq!(
            state.serialize(),
            "genres=Action,Comedy&min_score=7&sort_by=score&order=desc"
        );
    }

    #[test]
    fn hydrate_round_trips_through_serialize() {
        let query = "q=mononoke&genres=Drama,Fantasy&years=1997&max_score=9.5&sort_by=year&order=asc";
        let (state, page) = FilterState::hydrate(query);

        assert_eq!(page, 1);
        assert_eq!(state.serialize(), query);
    }

    #[test]
    fn hydrate_reads_the_page_parameter() {
        let (_, page) = FilterState::hydrate("genres=Action&page=4");
        assert_eq!(page, 4);

        let (_, page) = FilterState::hydrate("page=banana");
        assert_eq!(page, 1);

        let (_, page) = FilterState::hydrate("page=0");
        assert_eq!(page, 1);
    }

    #[test]
    fn hydrate_drops_duplicate_and_blank_tokens() {
        let (state, _) = FilterState::hydrate("genres=Action,,Action,%20,Comedy");
        assert_eq!(state.genres, vec!["Action", "Comedy"]);
    }

    #[test]
    fn sort_alone_does_not_count_as_active() {
        let state = FilterState {
            sort_by: SortBy::Year,
            order: SortOrder::Asc,
            ..Default::default()
        };
        assert!(!state.has_active_filters());
        assert_eq!(state.active_tags().len(), 1);
        assert_eq!(state.active_tags()[0].field, FilterField::Sort);
    }

    #[test]
    fn clearing_the_sort_resets_key_and_direction() {
        let mut state = FilterState {
            sort_by: SortBy::Members,
            order: SortOrder::Asc,
            genres: vec!["Action".to_string()],
            ..Default::default()
        };
        state.clear_field(FilterField::Sort);

        assert_eq!(state.sort_by, SortBy::Score);
        assert_eq!(state.order, SortOrder::Desc);
        assert_eq!(state.genres, vec!["Action"]);
    }

    #[test]
    fn permissive_policy_forwards_garbage() {
        let state = FilterState {
            min_score: "9".to_string(),
            max_score: "2".to_string(),
            years: vec!["soon".to_string()],
            ..Default::default()
        };
        assert!(state.validate(ValidationPolicy::Permissive).is_ok());
    }

    #[test]
    fn strict_policy_rejects_inverted_and_out_of_range_scores() {
        let inverted = FilterState {
            min_score: "9".to_string(),
            max_score: "2".to_string(),
            ..Default::default()
        };
        assert!(inverted.validate(ValidationPolicy::Strict).is_err());

        let out_of_range = FilterState {
            min_score: "11".to_string(),
            ..Default::default()
        };
        assert!(out_of_range.validate(ValidationPolicy::Strict).is_err());

        let bad_year = FilterState {
            years: vec!["199x".to_string()],
            ..Default::default()
        };
        assert!(bad_year.validate(ValidationPolicy::Strict).is_err());
    }

    #[test]
    fn strict_policy_parses_scores_leniently_on_whitespace_only() {
        let in_bounds = FilterState {
            min_score: " 6.5 ".to_string(),
            max_score: "9".to_string(),
            ..Default::default()
        };
        assert!(in_bounds.validate(ValidationPolicy::Strict).is_ok());

        let not_a_number = FilterState {
            min_score: "high".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            not_a_number.validate(ValidationPolicy::Strict),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn search_request_carries_sort_even_at_defaults() {
        let state = FilterState {
            genres: vec!["Action".to_string(), "Comedy".to_string()],
            ..Default::default()
        };
        let request = state.to_search_request(24, 48);

        assert_eq!(request.genres.as_deref(), Some("Action,Comedy"));
        assert_eq!(request.sort_by, SortBy::Score);
        assert_eq!(request.order, SortOrder::Desc);
        assert_eq!(request.offset, 48);
        assert_eq!(request.q, None);
    }
}
