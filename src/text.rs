/// Collapses runs of whitespace to a single space, trims, and uppercases.
///
/// Missing cells come through as `None` and normalize to an empty string so
/// downstream splitting never has to special-case them.
pub fn normalize<S: AsRef<str>>(text: Option<S>) -> String {
    match text {
        Some(value) => value
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase(),
        None => String::new(),
    }
}

/// Capitalizes the first letter of every space-delimited word and lowercases
/// the remainder.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
