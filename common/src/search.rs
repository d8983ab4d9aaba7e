//! Case-insensitive substring search for the pickers of the grade form.
//!
//! Matching lower-cases both sides and nothing else: no trimming, no accent
//! folding. A query with a trailing space only matches fields containing that
//! space.

use crate::model::student::Student;
use crate::model::subject::Subject;

/// Records that can be matched against a free-text query.
pub trait Searchable {
    /// Display fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, needle_lower: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }
}

/// Items whose fields contain `query`, in their original order. An empty
/// query keeps everything.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(code: &str, name: &str) -> Subject {
        Subject {
            id: 0,
            code: code.into(),
            name: name.into(),
            credits: 3,
            grades: None,
        }
    }

    #[test]
    fn subjects_match_on_code_or_name() {
        let subjects = vec![subject("MAT101", "Algebra"), subject("FIS100", "Física")];
        let hits: Vec<_> = filter(&subjects, "mat").iter().map(|s| s.code.as_str()).collect();
        assert_eq!(hits, ["MAT101"]);
        let hits: Vec<_> = filter(&subjects, "FÍS").iter().map(|s| s.code.as_str()).collect();
        assert_eq!(hits, ["FIS100"]);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let subjects = vec![subject("MAT101", "Algebra")];
        assert!(filter(&subjects, " algebra").is_empty());
    }
}
