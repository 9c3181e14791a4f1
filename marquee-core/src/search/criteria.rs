use marquee_model::Movie;

/// A trimmed, non-empty text criterion together with its case-folded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCriterion {
    text: String,
    folded: String,
}

impl TextCriterion {
    /// Returns `None` when `raw` is absent or blank after trimming.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// The trimmed input, case preserved.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn contained_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }

    fn equals(&self, other: &str) -> bool {
        other.to_lowercase() == self.folded
    }
}

/// Normalized search input.
///
/// Construction is the only place normalization happens; a criterion that is
/// `None` here was not supplied and places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    name: Option<TextCriterion>,
    id: Option<i64>,
    genre: Option<TextCriterion>,
}

impl SearchCriteria {
    /// Normalize raw inputs; blank text becomes "not supplied".
    pub fn new(
        name: Option<&str>,
        id: Option<i64>,
        genre: Option<&str>,
    ) -> Self {
        Self {
            name: TextCriterion::parse(name),
            id,
            genre: TextCriterion::parse(genre),
        }
    }

    /// Name-only search.
    pub fn by_name(name: &str) -> Self {
        Self::new(Some(name), None, None)
    }

    /// Id-only search.
    pub fn by_id(id: i64) -> Self {
        Self::new(None, Some(id), None)
    }

    /// Genre-only search.
    pub fn by_genre(genre: &str) -> Self {
        Self::new(None, None, Some(genre))
    }

    /// Trimmed name pattern, if supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(TextCriterion::as_str)
    }

    /// Requested id, if supplied.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Trimmed genre, if supplied.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_ref().map(TextCriterion::as_str)
    }

    /// True when no criterion was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.genre.is_none()
    }

    /// Whether `movie` satisfies every supplied criterion.
    pub fn matches(&self, movie: &Movie) -> bool {
        let name_ok = self
            .name
            .as_ref()
            .is_none_or(|pattern| pattern.contained_in(&movie.name));
        let id_ok = self.id.is_none_or(|id| movie.id == id);
        let genre_ok = self
            .genre
            .as_ref()
            .is_none_or(|genre| genre.equals(&movie.genre));

        name_ok && id_ok && genre_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::MovieId;

    fn movie(id: i64, name: &str, genre: &str) -> Movie {
        Movie {
            id: MovieId::new(id).unwrap(),
            name: name.to_string(),
            director: "Test Director".to_string(),
            year: 2000,
            genre: genre.to_string(),
            synopsis: String::new(),
            runtime_minutes: 100,
            rating: 4.0,
        }
    }

    #[test]
    fn blank_text_is_not_supplied() {
        assert!(SearchCriteria::new(None, None, None).is_empty());
        assert!(SearchCriteria::new(Some(""), None, Some("   ")).is_empty());
        assert!(SearchCriteria::new(Some("\t\n"), None, None).is_empty());
        assert!(!SearchCriteria::new(None, Some(0), None).is_empty());
    }

    #[test]
    fn text_is_trimmed_but_keeps_case() {
        let criteria =
            SearchCriteria::new(Some("  The Family "), None, Some(" Drama"));
        assert_eq!(criteria.name(), Some("The Family"));
        assert_eq!(criteria.genre(), Some("Drama"));
    }

    #[test]
    fn name_is_a_case_insensitive_substring() {
        let prison = movie(1, "The Prison Escape", "Drama");
        assert!(SearchCriteria::by_name("prison").matches(&prison));
        assert!(SearchCriteria::by_name("PRISON ESC").matches(&prison));
        assert!(SearchCriteria::by_name("  escape  ").matches(&prison));
        assert!(!SearchCriteria::by_name("boss").matches(&prison));
    }

    #[test]
    fn genre_must_match_exactly() {
        let drama = movie(1, "The Prison Escape", "Drama");
        let crime_drama = movie(2, "The Family Boss", "Crime/Drama");
        let criteria = SearchCriteria::by_genre("drama");

        assert!(criteria.matches(&drama));
        assert!(!criteria.matches(&crime_drama));
        assert!(
            SearchCriteria::by_genre(" crime/DRAMA ").matches(&crime_drama)
        );
        assert!(!SearchCriteria::by_genre("Crime").matches(&crime_drama));
    }

    #[test]
    fn supplied_criteria_all_have_to_hold() {
        let prison = movie(1, "The Prison Escape", "Drama");
        let all_hold =
            SearchCriteria::new(Some("Prison"), Some(1), Some("Drama"));
        let wrong_id = SearchCriteria::new(Some("Prison"), Some(2), None);
        let wrong_genre =
            SearchCriteria::new(Some("Prison"), None, Some("Crime/Drama"));

        assert!(all_hold.matches(&prison));
        assert!(!wrong_id.matches(&prison));
        assert!(!wrong_genre.matches(&prison));
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = SearchCriteria::default();
        assert!(criteria.matches(&movie(3, "Space Wars", "Adventure/Sci-Fi")));
    }

    #[test]
    fn non_positive_ids_match_nothing() {
        let prison = movie(1, "The Prison Escape", "Drama");
        assert!(!SearchCriteria::by_id(0).matches(&prison));
        assert!(!SearchCriteria::by_id(-1).matches(&prison));
    }
}
