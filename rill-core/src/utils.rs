//! Shared string utilities.

/// Turn an element id into a display name.
///
/// Splits camelCase boundaries (a lowercase letter or digit followed by an
/// uppercase letter), turns `_` and `-` into spaces, then uppercases the first
/// character of every word: `"applicationReceived"` -> `"Application Received"`,
/// `"order-approval"` -> `"Order Approval"`.
///
/// Only ASCII letters and digits count as word characters, so an acronym such
/// as `"HTTPCall"` stays in one piece.
pub fn humanize(id: &str) -> String {
    let mut spaced = String::with_capacity(id.len() + 4);
    let mut prev: Option<char> = None;
    for c in id.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            spaced.push(' ');
        }
        spaced.push(if c == '_' || c == '-' { ' ' } else { c });
        prev = Some(c);
    }

    let mut result = String::with_capacity(spaced.len());
    let mut in_word = false;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !in_word {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        in_word = is_word;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_camel_case() {
        assert_eq!(humanize("myStart"), "My Start");
        assert_eq!(humanize("applicationReceived"), "Application Received");
        assert_eq!(humanize("manualReview"), "Manual Review");
    }

    #[test]
    fn test_humanize_kebab_and_snake_case() {
        assert_eq!(humanize("order-approval"), "Order Approval");
        assert_eq!(humanize("send_reminder_mail"), "Send Reminder Mail");
        assert_eq!(humanize("mixed_style-id"), "Mixed Style Id");
    }

    #[test]
    fn test_humanize_short_ids() {
        assert_eq!(humanize("s"), "S");
        assert_eq!(humanize("gw"), "Gw");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_humanize_digits_and_acronyms() {
        assert_eq!(humanize("step2Done"), "Step2 Done");
        assert_eq!(humanize("HTTPCall"), "HTTPCall");
        assert_eq!(humanize("v2"), "V2");
    }

    #[test]
    fn test_humanize_keeps_existing_capitals() {
        assert_eq!(humanize("ERR_TIMEOUT"), "ERR TIMEOUT");
        assert_eq!(humanize("Already Spaced"), "Already Spaced");
    }
}
