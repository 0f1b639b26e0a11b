/// Converts a camel-case identifier to snake case, keeping acronyms together: `aCSUrl` becomes `a_cs_url`
/// and `verifyID` becomes `verify_id`.
pub fn underscore(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut snake = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let previous = chars[i - 1];
            let next = chars.get(i + 1).copied();

            let after_lower = previous.is_ascii_lowercase() || previous.is_ascii_digit();
            let ends_acronym = (previous.is_ascii_uppercase() || previous.is_ascii_digit())
                && next.is_some_and(|next| next.is_ascii_lowercase());

            if after_lower || ends_acronym {
                snake.push('_');
            }
        }

        snake.push(c.to_ascii_lowercase());
    }

    snake
}

/// Converts an identifier to upper camel case: `aCSUrl` becomes `ACSUrl`, `result_code` becomes `ResultCode`.
pub fn camelcase(word: &str) -> String {
    let mut camel = String::with_capacity(word.len());

    for (i, segment) in word.split('_').enumerate() {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            camel.push(first.to_ascii_uppercase());
        }

        if i == 0 {
            camel.extend(chars);
        } else {
            camel.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    camel
}
