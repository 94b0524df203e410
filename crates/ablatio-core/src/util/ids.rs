//! Metric name normalization utilities.
//!
//! Registry keys are snake_case so that `"Unnormalized Degree"`,
//! `"unnormalized-degree"` and `"unnormalized_degree"` all resolve to the
//! same metric. Result tables display the title-cased form.

/// Normalize a metric name to lowercase snake_case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Treats hyphens as word separators
/// 4. Collapses runs of whitespace/underscores into single underscores
///
/// # Examples
///
/// ```
/// use ablatio_core::util::ids::normalize_metric_name;
///
/// assert_eq!(normalize_metric_name("Degree"), "degree");
/// assert_eq!(normalize_metric_name("Unnormalized Degree"), "unnormalized_degree");
/// assert_eq!(normalize_metric_name("  katz-centrality "), "katz_centrality");
/// ```
pub fn normalize_metric_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
}

/// Title-case a metric name for use as a table column header.
///
/// # Examples
///
/// ```
/// use ablatio_core::util::ids::column_title;
///
/// assert_eq!(column_title("degree"), "Degree");
/// assert_eq!(column_title("unnormalized_degree"), "Unnormalized Degree");
/// ```
pub fn column_title(name: &str) -> String {
    normalize_metric_name(name)
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Header of the delta column that accompanies a metric column.
pub fn delta_title(name: &str) -> String {
    format!("Δ {}", column_title(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // normalize_metric_name tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_simple() {
        assert_eq!(normalize_metric_name("betweenness"), "betweenness");
    }

    #[test]
    fn test_normalize_mixed_case_with_spaces() {
        assert_eq!(
            normalize_metric_name("Unnormalized Degree"),
            "unnormalized_degree"
        );
    }

    #[test]
    fn test_normalize_hyphens() {
        assert_eq!(normalize_metric_name("unnormalized-degree"), "unnormalized_degree");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_metric_name("  a__b   c "), "a_b_c");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_metric_name(""), "");
        assert_eq!(normalize_metric_name("   "), "");
    }

    // -------------------------------------------------------------------------
    // column title tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_column_title_single_word() {
        assert_eq!(column_title("closeness"), "Closeness");
    }

    #[test]
    fn test_column_title_multi_word() {
        assert_eq!(column_title("unnormalized_degree"), "Unnormalized Degree");
    }

    #[test]
    fn test_delta_title() {
        assert_eq!(delta_title("katz"), "Δ Katz");
    }
}
