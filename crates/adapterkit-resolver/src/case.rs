// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier case conversion.
//!
//! Words are split on any non-alphanumeric character, on lower-to-upper
//! transitions, on letter/digit transitions, and before the last capital of an
//! acronym that is followed by a lowercase letter (`XMLHttp` -> `XML`, `Http`).

/// Split an identifier into its words, preserving the original casing.
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            if is_boundary(prev, c, next) {
                flush(&mut current, &mut words);
            }
        }

        current.push(c);
    }

    flush(&mut current, &mut words);
    words
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    let prev_digit = prev.is_numeric();
    let c_digit = c.is_numeric();

    if prev_digit != c_digit {
        return true;
    }

    if !prev.is_uppercase() && c.is_uppercase() {
        return true;
    }

    // Acronym followed by a capitalised word.
    prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase)
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// `TechnologyEngine` -> `technology_engine`
pub fn to_snake_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `technology_engine` -> `TechnologyEngine`
pub fn to_pascal_case(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

/// `technology_engine` -> `technologyEngine`
pub fn to_camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_on_separators_and_case() {
        assert_eq!(split_words("technology_engine"), vec!["technology", "engine"]);
        assert_eq!(split_words("TechnologyEngine"), vec!["Technology", "Engine"]);
        assert_eq!(split_words("technologyEngine"), vec!["technology", "Engine"]);
        assert_eq!(split_words("token-registry engine"), vec!["token", "registry", "engine"]);
        assert_eq!(split_words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(split_words("version2Engine"), vec!["version", "2", "Engine"]);
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn converts_composite_names() {
        assert_eq!(to_pascal_case("technology_engine"), "TechnologyEngine");
        assert_eq!(to_camel_case("technology_engine"), "technologyEngine");
        assert_eq!(to_snake_case("technology_engine"), "technology_engine");
        assert_eq!(to_snake_case("OtherEngine"), "other_engine");
        assert_eq!(to_snake_case("MyOtherEngine"), "my_other_engine");
        assert_eq!(to_pascal_case("redis-store"), "RedisStore");
    }

    #[test]
    fn acronyms_are_normalised() {
        assert_eq!(to_pascal_case("HTTP_engine"), "HttpEngine");
        assert_eq!(to_camel_case("HTTPEngine"), "httpEngine");
        assert_eq!(to_snake_case("HTTPEngine"), "http_engine");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_pascal_case(""), "");
    }

    proptest! {
        #[test]
        fn snake_case_is_idempotent(s in "[a-zA-Z0-9_ -]{0,24}") {
            let once = to_snake_case(&s);
            prop_assert_eq!(to_snake_case(&once), once);
        }

        #[test]
        fn conversions_agree_on_words(
            s in prop::collection::vec("[a-z]{2,8}", 1..5).prop_map(|w| w.join("_"))
        ) {
            let snake = to_snake_case(&s);
            prop_assert_eq!(to_snake_case(&to_pascal_case(&s)), snake.clone());
            prop_assert_eq!(to_snake_case(&to_camel_case(&s)), snake);
        }
    }
}
