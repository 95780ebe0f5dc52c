//! Merge engine primitives for partial updates.
//!
//! Entities implement [`Merge`] with their own patch type. Flat fields use
//! [`overlay`], free-form fields use [`merge_extra`], and designated nested
//! objects use [`merge_nested`] so that a patch carrying only some of their
//! sub-keys leaves the siblings untouched. Merging never mutates its inputs.

use serde_json::{Map, Value};

/// Free-form top-level fields carried alongside the typed ones.
pub type Extra = Map<String, Value>;

/// Keys a patch may never overwrite.
pub const PROTECTED_KEYS: &[&str] = &["id"];

/// A record that can absorb a partial update.
pub trait Merge: Sized {
    /// The partial-update payload: every field optional.
    type Patch;

    /// Compute the next version of `self` with `patch` applied.
    ///
    /// An empty patch must return a value equal to `self`.
    fn merge(&self, patch: &Self::Patch) -> Self;
}

/// Take the patch value when present, else keep the current one.
pub fn overlay<T: Clone>(current: &T, patch: Option<&T>) -> T {
    patch.unwrap_or(current).clone()
}

/// Shallow merge of free-form fields: patch keys overwrite or add, other
/// keys are kept. Keys in [`PROTECTED_KEYS`] are ignored.
pub fn merge_extra(current: &Extra, patch: &Extra) -> Extra {
    let mut next = current.clone();
    for (key, value) in patch {
        if PROTECTED_KEYS.contains(&key.as_str()) {
            continue;
        }
        next.insert(key.clone(), value.clone());
    }
    next
}

/// Merge one level deeper: a present patch is merged into the current
/// nested value, an absent one keeps it untouched.
pub fn merge_nested<T: Merge + Clone>(current: &T, patch: Option<&T::Patch>) -> T {
    match patch {
        Some(p) => current.merge(p),
        None => current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn extra(value: Value) -> Extra {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn overlay_prefers_patch() {
        assert_eq!(overlay(&"a".to_string(), Some(&"b".to_string())), "b");
        assert_eq!(overlay(&"a".to_string(), None), "a");
    }

    #[test]
    fn merge_extra_overwrites_and_adds() {
        let current = extra(json!({"venue": "Hall A", "capacity": 10}));
        let patch = extra(json!({"capacity": 20, "theme": "neon"}));
        let next = merge_extra(&current, &patch);
        assert_eq!(
            Value::Object(next),
            json!({"venue": "Hall A", "capacity": 20, "theme": "neon"})
        );
    }

    #[test]
    fn merge_extra_ignores_protected_keys() {
        let current = extra(json!({"venue": "Hall A"}));
        let patch = extra(json!({"id": "hijack"}));
        let next = merge_extra(&current, &patch);
        assert!(!next.contains_key("id"));
    }

    #[test]
    fn merge_extra_with_empty_patch_is_identity() {
        let current = extra(json!({"a": [1, 2], "b": {"c": true}}));
        assert_eq!(merge_extra(&current, &Extra::new()), current);
    }
}
