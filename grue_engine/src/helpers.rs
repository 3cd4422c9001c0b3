//! Helpers Module
//!
//! This module contains helper / simplifier functions that don't clearly belong in another module.

/// Returns "an" for names starting with a vowel, "a" otherwise.
pub fn indefinite_article(name: &str) -> &'static str {
    match name.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Joins names as an English list with articles: "a lamp", "a lamp and an apple",
/// "a lamp, an apple and a rope".
pub fn article_list<S: AsRef<str>>(names: &[S]) -> String {
    let with_articles: Vec<String> = names
        .iter()
        .map(|name| format!("{} {}", indefinite_article(name.as_ref()), name.as_ref()))
        .collect();
    match with_articles.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}
