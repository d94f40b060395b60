//! Placeholder substitution.
//!
//! The input is scanned once, left to right. At each position the longest
//! context key that starts there is replaced by its value and the scan
//! continues after the key. Inserted text is never scanned again, so a value
//! that happens to contain another key stays as-is.

use std::borrow::Cow;

use crate::context::Context;

/// Replaces every context key found in `input` with its rendered value.
///
/// Keys absent from `input` are ignored and text that matches no key is
/// copied through unchanged. Empty keys never match.
pub(crate) fn substitute(input: &str, context: &Context) -> String {
    let mut tokens: Vec<(&str, Cow<'_, str>)> = context
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key, value.render()))
        .collect();

    if tokens.is_empty() {
        return input.to_string();
    }

    // Longest first, so `$AB` wins over `$A` at the same position.
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    'scan: while !rest.is_empty() {
        for (key, text) in &tokens {
            if let Some(after) = rest.strip_prefix(key) {
                output.push_str(text);
                rest = after;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            output.push(ch);
        }
        rest = chars.as_str();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key() {
        let context = Context::new().with("$A", "B");
        assert_eq!(substitute("$A", &context), "B");
    }

    #[test]
    fn repeated_key() {
        let context = Context::new().with("$A", "B");
        assert_eq!(substitute("$A-$A-$A", &context), "B-B-B");
    }

    #[test]
    fn empty_context_copies_input() {
        assert_eq!(substitute("$A and $B", &Context::new()), "$A and $B");
    }

    #[test]
    fn empty_key_is_ignored() {
        let context = Context::new().with("", "X");
        assert_eq!(substitute("abc", &context), "abc");
    }

    #[test]
    fn longest_key_wins() {
        let context = Context::new().with("$A", "short").with("$AB", "long");
        assert_eq!(substitute("$AB $A $ABC", &context), "long short longC");
    }

    #[test]
    fn longest_key_wins_regardless_of_order() {
        let context = Context::new().with("$AB", "long").with("$A", "short");
        assert_eq!(substitute("$AB $A", &context), "long short");
    }

    #[test]
    fn values_are_not_rescanned() {
        let context = Context::new().with("$A", "$B").with("$B", "b");
        assert_eq!(substitute("$A $B", &context), "$B b");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let context = Context::new().with("$NAME", "Zoë");
        assert_eq!(substitute("héllo $NAME ✓", &context), "héllo Zoë ✓");
    }

    #[test]
    fn keys_need_not_start_with_dollar() {
        let context = Context::new().with("{{version}}", "1.2.3");
        assert_eq!(substitute("v{{version}}", &context), "v1.2.3");
    }
}
