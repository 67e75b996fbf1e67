// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sparse get-or-create access into index-addressed sequences.
//!
//! The authoring UI addresses collections, records and conditions by plain
//! integer fields, so any index the user types must resolve to a live
//! element. Lookups grow the sequence with defaults instead of failing;
//! nothing here ever shrinks a sequence or touches existing elements.

use thiserror::Error;

/// Error raised for indices outside a store's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Negative index. The UI clamps its index fields to zero, so reaching
    /// this means a caller bug; the operation aborts instead of guessing.
    #[error("invalid index {0}: indices must be non-negative")]
    InvalidIndex(i64),
}

/// Get the element at `index`, appending default elements as needed.
///
/// Grows `items` until `index` is a valid slot, never shrinks it, and never
/// replaces elements that already exist. The returned reference points into
/// `items`, so edits land directly in the owning sequence; it is only valid
/// for the current pass and must be re-resolved after anything else touches
/// the sequence.
pub fn get_or_create<T: Default>(items: &mut Vec<T>, index: i64) -> Result<&mut T, StoreError> {
    let slot = usize::try_from(index).map_err(|_| StoreError::InvalidIndex(index))?;
    while items.len() <= slot {
        items.push(T::default());
    }
    Ok(&mut items[slot])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_to_cover_index() {
        let mut items: Vec<i32> = Vec::new();
        *get_or_create(&mut items, 3).unwrap() = 7;
        assert_eq!(items, vec![0, 0, 0, 7]);
    }

    #[test]
    fn test_repeat_access_is_idempotent() {
        let mut items: Vec<String> = vec!["keep".to_string()];
        get_or_create(&mut items, 2).unwrap().push_str("touched");
        assert_eq!(items.len(), 3);

        let value = get_or_create(&mut items, 2).unwrap().clone();
        assert_eq!(items.len(), 3);
        assert_eq!(value, "touched");
        assert_eq!(items[0], "keep");
    }

    #[test]
    fn test_never_shrinks() {
        let mut items: Vec<i32> = vec![1, 2, 3, 4];
        get_or_create(&mut items, 0).unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let mut items: Vec<i32> = vec![1];
        assert!(matches!(
            get_or_create(&mut items, -1),
            Err(StoreError::InvalidIndex(-1))
        ));
        assert_eq!(items, vec![1]);
    }
}
