use super::data::MovieRecord;

/// Lowercased search term. Whitespace-only input collapses to "" ("no filter");
/// otherwise surrounding spaces are kept and take part in the match.
pub fn normalize_query(s: &str) -> String {
    if s.trim().is_empty() {
        String::new()
    } else {
        s.to_lowercase()
    }
}

/// `query` must already be normalized.
pub fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(query)
}

pub fn filtered_indices(records: &[MovieRecord], term: &str) -> Vec<usize> {
    let q = normalize_query(term);
    records
        .iter()
        .enumerate()
        .filter(|(_, m)| title_matches(&m.title, &q))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn films() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Alien", 1979, 117),
            MovieRecord::new("Aliens", 1986, 137),
            MovieRecord::new("Heat", 1995, 170),
        ]
    }

    #[test]
    fn normalize_lowercases_and_blanks_whitespace_only() {
        assert_eq!(normalize_query("The GODFATHER"), "the godfather");
        assert_eq!(normalize_query(" Heat "), " heat ");
        assert_eq!(normalize_query("   "), "");
        assert_eq!(normalize_query(" \t\n"), "");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(title_matches("anything", ""));
        assert_eq!(filtered_indices(&films(), ""), vec![0, 1, 2]);
        assert_eq!(filtered_indices(&films(), " \n "), vec![0, 1, 2]);
    }

    #[test]
    fn substring_anywhere_in_title() {
        assert_eq!(filtered_indices(&films(), "lien"), vec![0, 1]);
        assert_eq!(filtered_indices(&films(), "EAT"), vec![2]);
        assert!(filtered_indices(&films(), "predator").is_empty());
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_term() {
        assert_eq!(filtered_indices(&films(), "heat "), Vec::<usize>::new());
        assert_eq!(filtered_indices(&films(), "alien "), Vec::<usize>::new());
        assert_eq!(filtered_indices(&films(), "alien"), vec![0, 1]);
    }

    #[test]
    fn non_ascii_case_folding() {
        let rows = vec![MovieRecord::new("Amélie", 2001, 122)];
        assert_eq!(filtered_indices(&rows, "AMÉLIE"), vec![0]);
    }
}
