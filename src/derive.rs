//! Hierarchical attribute derivation
//!
//! This module implements the single piece of non-trivial logic in the
//! crate: deriving a stable, human-readable attribute value for an
//! element from the nearest ancestor that already carries an identifying
//! attribute. Given an anchor ancestor with id `foo` and a suffix `bar`,
//! the derived value is `foo-bar`.
//!
//! Derivation is write-once and side-effect-light: at most one attribute
//! is written, on the target element only, and an element whose attribute
//! is already populated is never overwritten. Every way a value can fail
//! to be derived (empty suffix, unknown target, populated attribute, no
//! anchor in the ancestor chain) is a normal outcome surfaced as `None`,
//! not an error.

use crate::ElementTree;

/// The identifying attribute that anchors every derivation
pub const ID_ATTRIBUTE: &str = "id";

/// The cross-referencing attribute linking a label-like element to a control
pub const FOR_ATTRIBUTE: &str = "for";

/// Derive a value for `attr` on `target` from the nearest identified ancestor.
///
/// Walks the ancestor chain starting at `target`'s parent and stops at
/// the first element carrying a non-empty [`ID_ATTRIBUTE`] value (the
/// anchor). On success the target's `attr` is set to
/// `{anchor-id}-{suffix}` and the target handle is returned.
///
/// Returns `None`, writing nothing, when `suffix` is empty, when `target`
/// already has a non-empty value for `attr`, or when no ancestor up to
/// the root carries an identifying value. The nearest qualifying ancestor
/// always wins, even if elements further up also carry ids.
pub fn derive_attribute<T: ElementTree>(
    tree: &mut T,
    attr: &str,
    suffix: &str,
    target: T::Ref,
) -> Option<T::Ref> {
    if suffix.is_empty() {
        return None;
    }
    if tree.attribute(target, attr).is_some_and(|v| !v.is_empty()) {
        return None;
    }

    let mut cursor = tree.parent(target);
    let mut anchor_id = None;
    while let Some(ancestor) = cursor {
        match tree.attribute(ancestor, ID_ATTRIBUTE) {
            Some(id) if !id.is_empty() => {
                anchor_id = Some(id.to_owned());
                break;
            }
            _ => cursor = tree.parent(ancestor),
        }
    }

    let Some(anchor_id) = anchor_id else {
        // Nobody in the chain has an id
        tracing::debug!("no identified ancestor for {target:?}; {attr:?} not derived");
        return None;
    };

    tree.set_attribute(target, attr, &format!("{anchor_id}-{suffix}"));
    Some(target)
}

/// Derive the identifying attribute itself from the nearest identified
/// ancestor, giving nested elements ids like `settings-panel-close`.
pub fn derive_id<T: ElementTree>(tree: &mut T, suffix: &str, target: T::Ref) -> Option<T::Ref> {
    derive_attribute(tree, ID_ATTRIBUTE, suffix, target)
}

/// Derive the cross-referencing attribute from the nearest identified
/// ancestor, linking a label-like element to the control it describes.
pub fn derive_for<T: ElementTree>(tree: &mut T, suffix: &str, target: T::Ref) -> Option<T::Ref> {
    derive_attribute(tree, FOR_ATTRIBUTE, suffix, target)
}
