//! Module with the local text filter over already fetched motions.

use moties_data_model::{Motion, Submitter};

/// Case-insensitive search term.
///
/// A motion matches if the term is a substring of its title, its subject,
/// or the name or faction label of any of its submitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    /// Lowercased term.
    needle: String,
}

impl SearchTerm {
    /// Create new [`SearchTerm`] from user input.
    ///
    /// Input is used as is: only an empty string disables filtering.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Check if the term filters nothing out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check if `motion` matches the term.
    #[must_use]
    pub fn matches(&self, motion: &Motion) -> bool {
        if self.is_empty() {
            return true;
        }

        self.contained_in(motion.title.as_deref())
            || self.contained_in(motion.subject.as_deref())
            || motion
                .submitters
                .iter()
                .any(|Submitter { name, faction }| {
                    self.contained_in(name.as_deref()) || self.contained_in(faction.as_deref())
                })
    }

    /// Check if the term is a case-insensitive substring of `field`. Absent fields never match.
    fn contained_in(&self, field: Option<&str>) -> bool {
        field.is_some_and(|text| text.to_lowercase().contains(&self.needle))
    }
}

/// Select motions matching `term`, preserving their order.
pub fn filter_motions<'motion>(
    motions: &'motion [Motion],
    term: &str,
) -> impl Iterator<Item = &'motion Motion> {
    let term = SearchTerm::new(term);
    motions.iter().filter(move |motion| term.matches(motion))
}
