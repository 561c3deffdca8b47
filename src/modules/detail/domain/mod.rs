use crate::modules::catalog::domain::entities::AnimeSummary;

/// One relation bucket of the related-works panel, e.g. "Sequel" or
/// "Side Story". Groups with no anime entries are dropped before they
/// reach the view.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedGroup {
    pub relation: String,
    pub entries: Vec<RelatedEntry>,
}

/// A related title. Entries found in our own catalog render as full
/// cards; the rest become external stubs linking out to MAL.
#[derive(Debug, Clone, PartialEq)]
pub enum RelatedEntry {
    InDatabase(AnimeSummary),
    External {
        mal_id: i64,
        title: String,
        mal_url: String,
    },
}

impl RelatedEntry {
    pub fn title(&self) -> &str {
        match self {
            RelatedEntry::InDatabase(anime) => anime.display_title(),
            RelatedEntry::External { title, .. } => title,
        }
    }

    pub fn in_database(&self) -> bool {
        matches!(self, RelatedEntry::InDatabase(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_titles_use_the_card_fallback() {
        let sparse: AnimeSummary = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let entry = RelatedEntry::InDatabase(sparse);
        assert_eq!(entry.title(), "Unknown Title");

        let stub = RelatedEntry::External {
            mal_id: 31,
            title: "Neon Genesis Evangelion".to_string(),
            mal_url: "https://myanimelist.net/anime/31".to_string(),
        };
        assert_eq!(stub.title(), "Neon Genesis Evangelion");
        assert!(!stub.in_database());
    }
}
