//! Picking the most notable fact about a movie.
//!
//! Two optional highlights are tried in order with `alt`, and the release
//! year is the fallback when neither applies.

use fp_lessons::control::Maybe;
use fp_lessons::pipe;

/// Ranking positions up to this one count as top 10.
pub const TOP_POSITIONS: u32 = 10;

/// A rated movie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movie {
    /// Title.
    pub title: String,
    /// Year of release.
    pub release_year: u16,
    /// Position in the rating, starting at 1.
    pub rating_position: u32,
    /// Award won, if any.
    pub award: Option<String>,
}

/// The award, if the movie won one.
pub fn award_highlight(movie: &Movie) -> Maybe<String> {
    Maybe::from_nullable(movie.award.as_deref()).map(|award| format!("Awarded with: {award}"))
}

/// The rating position, if the movie is in the top 10.
pub fn top10_highlight(movie: &Movie) -> Maybe<String> {
    Maybe::from_predicate(movie, |movie| movie.rating_position <= TOP_POSITIONS)
        .map(|movie| format!("In TOP 10 at position: {}", movie.rating_position))
}

/// The award, else the top 10 position, else the release year.
///
/// # Examples
///
/// ```
/// use walkthrough::movies::{movie_highlight, sample_movies};
///
/// let [awarded, top_rated, other] = sample_movies();
/// assert_eq!(movie_highlight(&awarded), "Awarded with: Oscar");
/// assert_eq!(movie_highlight(&top_rated), "In TOP 10 at position: 3");
/// assert_eq!(movie_highlight(&other), "Released in 2023");
/// ```
pub fn movie_highlight(movie: &Movie) -> String {
    pipe!(movie, award_highlight)
        .alt(|| top10_highlight(movie))
        .get_or_else(|| format!("Released in {}", movie.release_year))
}

/// Three movies covering each highlight.
pub fn sample_movies() -> [Movie; 3] {
    [
        Movie {
            title: "The Kingdom of Monads".to_string(),
            release_year: 2023,
            rating_position: 1,
            award: Some("Oscar".to_string()),
        },
        Movie {
            title: "Natural Transformations".to_string(),
            release_year: 2023,
            rating_position: 3,
            award: None,
        },
        Movie {
            title: "Fun with loops".to_string(),
            release_year: 2023,
            rating_position: 74,
            award: None,
        },
    ]
}
