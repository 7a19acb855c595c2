//! Time-derived identifiers.
//!
//! Entities created on the client get ids of the form `<prefix>-<millis>`.
//! Two creations inside the same millisecond would collide, so the caller
//! passes a predicate telling which ids are already taken and a numeric
//! suffix is appended until the id is free.

use chrono::Utc;

/// Build `<prefix>-<now millis>`, suffixed with `-<n>` if already taken.
pub fn unique_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    unique_id_at(prefix, Utc::now().timestamp_millis(), taken)
}

pub fn unique_id_at(prefix: &str, millis: i64, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{prefix}-{millis}");
    if !taken(&base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_id_is_unsuffixed() {
        assert_eq!(unique_id_at("chat", 42, |_| false), "chat-42");
    }

    #[test]
    fn collisions_get_suffix() {
        let existing = ["chat-42", "chat-42-1"];
        let id = unique_id_at("chat", 42, |c| existing.contains(&c));
        assert_eq!(id, "chat-42-2");
    }
}
