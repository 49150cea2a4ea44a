//! Deep merge for declaration objects.
//!
//! Merging folds a source object into a target, key by key:
//!
//! | Source value | Target value | Result |
//! |--------------|--------------|--------|
//! | nested | nested | merged recursively |
//! | nested | missing or not nested | source merged into a fresh object |
//! | list | list | target items followed by source items |
//! | list | anything else | source list |
//! | scalar | anything | source value (last write wins) |
//!
//! Sibling keys are never dropped, so statements such as `:hover=red` and
//! `:hover::before=x` accumulate under the same `&:hover` scope.

use super::{Declarations, Value};

impl Declarations {
    /// Deep-merges `source` into `self`.
    pub fn merge(&mut self, source: Declarations) {
        for (key, incoming) in source {
            match incoming {
                Value::Nested(nested) => {
                    let slot = self
                        .entries
                        .entry(key)
                        .or_insert_with(|| Value::Nested(Declarations::new()));
                    if !slot.is_nested() {
                        *slot = Value::Nested(Declarations::new());
                    }
                    if let Value::Nested(existing) = slot {
                        existing.merge(nested);
                    }
                }
                Value::List(items) => match self.entries.get_mut(&key) {
                    Some(Value::List(existing)) => existing.extend(items),
                    _ => {
                        self.entries.insert(key, Value::List(items));
                    }
                },
                scalar => {
                    self.entries.insert(key, scalar);
                }
            }
        }
    }

    /// Builder form of [`Declarations::merge`].
    pub fn merged(mut self, source: Declarations) -> Declarations {
        self.merge(source);
        self
    }

    /// Merges every source into `self`, left to right.
    pub fn merge_all<I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = Declarations>,
    {
        for source in sources {
            self.merge(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations;

    #[test]
    fn test_scalar_overwrite() {
        let merged = declarations! { "color" => "red" }.merged(declarations! { "color" => "blue" });
        assert_eq!(merged, declarations! { "color" => "blue" });
    }

    #[test]
    fn test_list_append() {
        let merged = declarations! { "boxShadow" => vec!["a"] }
            .merged(declarations! { "boxShadow" => vec!["b"] });
        assert_eq!(merged, declarations! { "boxShadow" => vec!["a", "b"] });
    }

    #[test]
    fn test_list_replaces_scalar() {
        let merged = declarations! { "boxShadow" => "none" }
            .merged(declarations! { "boxShadow" => vec!["b"] });
        assert_eq!(merged, declarations! { "boxShadow" => vec!["b"] });
    }

    #[test]
    fn test_nested_keeps_siblings() {
        let a = declarations! {
            "&:hover" => declarations! { "color" => "red" },
        };
        let b = declarations! {
            "&:hover" => declarations! { "&::before" => declarations! { "content" => "\"x\"" } },
        };

        let merged = a.merged(b);
        let hover = merged.get_nested("&:hover").unwrap();
        assert_eq!(hover.get("color"), Some(&Value::from("red")));
        assert!(hover.get_nested("&::before").is_some());
    }

    #[test]
    fn test_nested_replaces_scalar() {
        let merged = declarations! { "&:hover" => "oops" }
            .merged(declarations! { "&:hover" => declarations! { "color" => "red" } });
        assert_eq!(
            merged,
            declarations! { "&:hover" => declarations! { "color" => "red" } }
        );
    }

    #[test]
    fn test_scalar_replaces_nested() {
        let merged = declarations! { "k" => declarations! { "color" => "red" } }
            .merged(declarations! { "k" => "flat" });
        assert_eq!(merged, declarations! { "k" => "flat" });
    }

    #[test]
    fn test_empty_objects() {
        let mut target = Declarations::new();
        target.merge(Declarations::new());
        assert!(target.is_empty());

        let merged = declarations! { "a" => "1" }.merged(Declarations::new());
        assert_eq!(merged, declarations! { "a" => "1" });
    }

    #[test]
    fn test_merge_all_matches_pairwise() {
        let a = declarations! { "a" => "1", "x" => declarations! { "p" => "1" } };
        let b = declarations! { "b" => "2", "x" => declarations! { "q" => "2" } };
        let c = declarations! { "c" => "3", "x" => declarations! { "r" => "3" } };

        let mut all = Declarations::new();
        all.merge_all(vec![a.clone(), b.clone(), c.clone()]);

        let pairwise = Declarations::new().merged(a).merged(b).merged(c);
        assert_eq!(all, pairwise);
    }

    #[test]
    fn test_associative_without_shared_scalars() {
        let a = declarations! { "a" => "1", "s" => declarations! { "p" => "1" } };
        let b = declarations! { "b" => vec!["x"], "s" => declarations! { "q" => "2" } };
        let c = declarations! { "b" => vec!["y"], "s" => declarations! { "r" => "3" } };

        let left = a.clone().merged(b.clone()).merged(c.clone());
        let right = a.merged(b.merged(c));
        assert_eq!(left, right);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Key prefixes keep each key to one value shape: `s` scalar, `l` list, `n` nested.
    fn flat() -> impl Strategy<Value = Declarations> {
        (
            prop::collection::vec(("s[a-c]", "[a-z]{1,3}"), 0..4),
            prop::collection::vec(("l[a-c]", prop::collection::vec("[a-z]{1,2}", 0..3)), 0..3),
        )
            .prop_map(|(scalars, lists)| {
                let mut decls = Declarations::new();
                for (key, value) in scalars {
                    decls.insert(key, value);
                }
                for (key, items) in lists {
                    decls.insert(key, Value::from(items));
                }
                decls
            })
    }

    fn declarations() -> impl Strategy<Value = Declarations> {
        (flat(), prop::collection::vec(("n[a-b]", flat()), 0..3)).prop_map(|(mut decls, nested)| {
            for (key, inner) in nested {
                decls.insert(key, inner);
            }
            decls
        })
    }

    proptest! {
        #[test]
        fn merge_is_associative(a in declarations(), b in declarations(), c in declarations()) {
            let left = a.clone().merged(b.clone()).merged(c.clone());
            let right = a.merged(b.merged(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn merging_empty_is_identity(a in declarations()) {
            prop_assert_eq!(a.clone().merged(Declarations::new()), a.clone());
            prop_assert_eq!(Declarations::new().merged(a.clone()), a);
        }
    }
}
