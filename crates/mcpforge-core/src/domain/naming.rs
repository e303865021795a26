//! Identifier conventions derived from a component name.
//!
//! Every function here is pure and total: any input, including the empty
//! string, produces a value.
//!
//! ## Word splitting
//!
//! Words are split on `-`, `_`, whitespace, and on a lowercase-or-digit to
//! uppercase transition, so `weather-api`, `weather_api`, `Weather Api` and
//! `weatherApi` all yield `["weather", "Api"]`-equivalent words.
//!
//! | Input          | kebab          | Pascal        | camel         |
//! |----------------|----------------|---------------|---------------|
//! | "My Thing"     | "my-thing"     | "MyThing"     | "myThing"     |
//! | "fetch_url"    | "fetch-url"    | "FetchUrl"    | "fetchUrl"    |
//! | "getWeather"   | "get-weather"  | "GetWeather"  | "getWeather"  |

use crate::domain::value_objects::ComponentKind;

/// Split a name into words.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// `"My Thing"` → `"my-thing"`.
pub fn to_kebab_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"my-thing"` → `"MyThing"`.
pub fn to_pascal_case(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

/// `"my-thing"` → `"myThing"`.
pub fn to_camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

/// Class name of a component: `WeatherTool`.
pub fn type_name(kind: ComponentKind, name: &str) -> String {
    format!("{}{}", to_pascal_case(name), kind.suffix())
}

/// Variable name of a component instance: `weatherTool`.
pub fn instance_name(kind: ComponentKind, name: &str) -> String {
    format!("{}{}", to_camel_case(name), kind.suffix())
}

/// File stem of a component, without extension: `weather-tool`.
pub fn file_stem(kind: ComponentKind, name: &str) -> String {
    let kebab = to_kebab_case(name);
    if kebab.is_empty() {
        kind.as_str().to_string()
    } else {
        format!("{}-{}", kebab, kind.as_str())
    }
}

/// File name of a component: `weather-tool.ts`.
pub fn file_name(kind: ComponentKind, name: &str) -> String {
    format!("{}.ts", file_stem(kind, name))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
