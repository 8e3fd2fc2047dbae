use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

use crate::errors::BlockKitError;

/// Most elements an actions block may hold.
pub const MAX_ACTIONS_ELEMENTS: usize = 5;
/// Most elements a context block may hold.
pub const MAX_CONTEXT_ELEMENTS: usize = 10;
/// Most options an overflow menu may hold.
pub const MAX_OVERFLOW_OPTIONS: usize = 10;
/// Most flat options, or option groups, a static select may hold.
pub const MAX_SELECT_OPTIONS: usize = 10;

/// Ordered list holding at most `N` items.
///
/// The bound is checked when the list is built and again when it is decoded,
/// so an over-long list never makes it into the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bounded<T, const N: usize>(Vec<T>);

impl<T, const N: usize> Bounded<T, N> {
    pub fn new(items: Vec<T>, container: &'static str) -> Result<Self, BlockKitError> {
        if items.len() > N {
            tracing::debug!(container, limit = N, actual = items.len(), "cardinality exceeded");
            return Err(BlockKitError::CardinalityExceeded {
                container,
                limit: N,
                actual: items.len(),
            });
        }
        Ok(Self(items))
    }

    pub const fn limit() -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T, const N: usize> Deref for Bounded<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Bounded<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Bounded<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        if items.len() > N {
            return Err(D::Error::custom(format!(
                "expected at most {N} items, got {}",
                items.len()
            )));
        }
        Ok(Self(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_up_to_the_limit() {
        let list = Bounded::<u8, 3>::new(vec![1, 2, 3], "test list").expect("within limit");
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(Bounded::<u8, 3>::limit(), 3);
    }

    #[test]
    fn rejects_past_the_limit() {
        let err = Bounded::<u8, 2>::new(vec![1, 2, 3], "test list").unwrap_err();
        assert_eq!(
            err,
            BlockKitError::CardinalityExceeded {
                container: "test list",
                limit: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn decode_enforces_the_limit() {
        let err = serde_json::from_str::<Bounded<u8, 2>>("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("expected at most 2 items, got 3"));
        let ok: Bounded<u8, 2> = serde_json::from_str("[1]").expect("decode");
        assert_eq!(ok.len(), 1);
    }
}
