//! Credential masking.

const MASK: &str = "*****";

/// Secrets shorter than this are masked completely.
const MIN_REVEAL_LEN: usize = 8;

/// Default password masker.
///
/// Short secrets become `*****`. Longer ones keep only their first and last
/// character, e.g. `correct-horse` becomes `c*****e`. The output never
/// contains the input.
#[must_use]
pub fn password(secret: &str) -> String {
    if secret.chars().count() < MIN_REVEAL_LEN {
        return MASK.to_string();
    }
    let mut chars = secret.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => format!("{first}{MASK}{last}"),
        _ => MASK.to_string(),
    }
}
