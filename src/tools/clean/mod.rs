mod utils;

use utils::*;

/// Clean one line of page text.
///
/// Performs the following operations in order:
/// 1. Normalize Unicode to NFC (canonical composition)
/// 2. Remove zero-width characters
/// 3. Remove control characters (except newlines/tabs)
/// 4. Normalize whitespace (collapse runs, including NBSP, and trim)
///
/// # Examples
/// ```
/// use recipe_scraper::tools::clean::clean;
///
/// let result = clean("  Mehl\u{200B}   (Type\u{a0}405) ");
/// assert_eq!(result, "Mehl (Type 405)");
/// ```
pub fn clean(text: &str) -> String {
    let mut result = normalize_unicode(text);
    result = remove_zero_width_chars(&result);
    result = remove_control_chars(&result);
    normalize_whitespace(&result)
}

/// Split text on newlines, clean each line and drop the empty ones.
///
/// # Examples
/// ```
/// use recipe_scraper::tools::clean::split_lines;
///
/// assert_eq!(split_lines("Mix.\n\n Bake. \n"), vec!["Mix.", "Bake."]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(clean)
        .filter(|line| !line.is_empty())
        .collect()
}
