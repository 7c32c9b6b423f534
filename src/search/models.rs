use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::core::category::Category;
use super::destination::Destination;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SuggestionKind {

    Intent,

    Fallback,

    Popular,
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {

    pub id: String,

    pub text: String,

    pub category: Category,

    pub icon: String,

    pub url: String,

    pub kind: SuggestionKind,
}

impl Suggestion {

    pub fn for_query(kind: SuggestionKind, category: Category, query: &str) -> Self {
        let kind_name: &'static str = kind.into();
        Self {
            id: format!("{}-{}", kind_name, category.slug()),
            text: suggestion_text(category, query),
            category,
            icon: category.icon().to_string(),
            url: Destination::new(category, query).path(),
            kind,
        }
    }


    pub fn popular(index: usize, category: Category, text: &str) -> Self {
        Self {
            id: format!("popular-{}", index + 1),
            text: text.to_string(),
            category,
            icon: category.icon().to_string(),
            url: Destination::new(category, text).path(),
            kind: SuggestionKind::Popular,
        }
    }


    pub fn destination(&self) -> Destination {
        Destination::parse(&self.url)
            .unwrap_or_else(|_| Destination::new(self.category, self.text.clone()))
    }
}

fn suggestion_text(category: Category, query: &str) -> String {
    match category {
        Category::Jobs => format!("หางาน \"{}\"", query),
        Category::Market => format!("ค้นหา \"{}\" ในตลาด", query),
        Category::Guides => format!("ที่เที่ยว/ร้าน \"{}\"", query),
        Category::Community => format!("กระทู้เกี่ยวกับ \"{}\"", query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_query() {
        let s = Suggestion::for_query(SuggestionKind::Intent, Category::Jobs, "ครู");
        assert_eq!(s.id, "intent-jobs");
        assert_eq!(s.icon, "💼");
        assert_eq!(s.url, "/jobs?search=%E0%B8%84%E0%B8%A3%E0%B8%B9");
        assert!(s.text.contains("ครู"));
        assert_eq!(s.destination(), Destination::new(Category::Jobs, "ครู"));
    }

    #[test]
    fn test_popular_ids_are_one_based() {
        let s = Suggestion::popular(0, Category::Guides, "คาเฟ่");
        assert_eq!(s.id, "popular-1");
        assert_eq!(s.kind, SuggestionKind::Popular);
        assert!(s.url.starts_with("/guide?search="));
    }

    #[test]
    fn test_serialize_shape() {
        let s = Suggestion::for_query(SuggestionKind::Fallback, Category::Market, "x");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["category"], "market");
        assert_eq!(json["kind"], "fallback");
        assert_eq!(json["url"], "/market?search=x");
    }
}
