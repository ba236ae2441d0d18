/// Human-readable label for an option identifier.
///
/// The first `-` becomes a space, then every ASCII letter that starts a word is upper-cased.
/// A word character is an ASCII alphanumeric or `_`; anything else separates words.
pub fn option_label(option: &str) -> String {
    let spaced = option.replacen('-', " ", 1);

    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/label.rs"]
mod tests;
