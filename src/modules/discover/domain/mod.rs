use crate::modules::catalog::domain::entities::CuratedCategory;

/// Grid size of the discover page.
pub const DISCOVER_PAGE_SIZE: u32 = 20;

/// Top-level tab of the discover page. `Popular` fetches directly,
/// `Quality` and `Recency` fan out into subcategories, and the two
/// dropdown tabs need a picked option before anything can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCategory {
    Popular,
    Quality,
    Recency,
    Genre,
    Studio,
}

impl MainCategory {
    pub const ALL: [MainCategory; 5] = [
        MainCategory::Popular,
        MainCategory::Quality,
        MainCategory::Recency,
        MainCategory::Genre,
        MainCategory::Studio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainCategory::Popular => "Popular",
            MainCategory::Quality => "Quality",
            MainCategory::Recency => "Recent",
            MainCategory::Genre => "Genre",
            MainCategory::Studio => "Studio",
        }
    }

    pub fn subcategories(&self) -> &'static [SubCategory] {
        match self {
            MainCategory::Quality => &[SubCategory::TopRated, SubCategory::HiddenGems],
            MainCategory::Recency => &[SubCategory::Latest, SubCategory::Trending],
            _ => &[],
        }
    }
}

/// Second-level pick under `Quality` and `Recency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCategory {
    TopRated,
    HiddenGems,
    Latest,
    Trending,
}

impl SubCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SubCategory::TopRated => "Top Rated",
            SubCategory::HiddenGems => "Hidden Gems",
            SubCategory::Latest => "Latest",
            SubCategory::Trending => "Trending",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SubCategory::TopRated => "Highest scored anime (8.0+)",
            SubCategory::HiddenGems => "Underrated quality anime",
            SubCategory::Latest => "Recent releases",
            SubCategory::Trending => "Currently trending",
        }
    }

    pub fn curated(&self) -> CuratedCategory {
        match self {
            SubCategory::TopRated => CuratedCategory::TopRated,
            SubCategory::HiddenGems => CuratedCategory::HiddenGems,
            SubCategory::Latest => CuratedCategory::Latest,
            SubCategory::Trending => CuratedCategory::Trending,
        }
    }
}

/// The concrete thing the grid is showing, once the category tree has
/// resolved to something fetchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoverSelection {
    Curated(CuratedCategory),
    ByGenre(String),
    ByStudio(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_quality_and_recency_have_subcategories() {
        assert!(MainCategory::Popular.subcategories().is_empty());
        assert_eq!(MainCategory::Quality.subcategories().len(), 2);
        assert_eq!(
            MainCategory::Recency.subcategories()[0],
            SubCategory::Latest
        );
        assert!(MainCategory::Genre.subcategories().is_empty());
    }

    #[test]
    fn subcategories_map_onto_curated_buckets() {
        assert_eq!(SubCategory::TopRated.curated(), CuratedCategory::TopRated);
        assert_eq!(SubCategory::Trending.curated(), CuratedCategory::Trending);
    }
}
