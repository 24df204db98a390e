//! Core element tree trait

/// Common interface for attribute-bearing element trees.
///
/// The deriver only needs three capabilities from the rendering layer:
/// look up a parent, read a named attribute, and write a named attribute.
/// Any DOM-like structure that can answer those over an opaque handle can
/// back the derivation operations in [`crate::derive`].
///
/// A handle the tree does not recognize reports no parent and no
/// attributes, and writes through it are dropped. This stands in for the
/// "null element" of pointer-based trees without making handles nullable.
pub trait ElementTree {
    /// Handle used to address elements in this tree
    type Ref: Copy + Eq + std::fmt::Debug;

    /// Get the parent of an element (None at the root)
    fn parent(&self, element: Self::Ref) -> Option<Self::Ref>;

    /// Read a named attribute (None if unset)
    fn attribute(&self, element: Self::Ref, name: &str) -> Option<&str>;

    /// Write a named attribute on an element
    fn set_attribute(&mut self, element: Self::Ref, name: &str, value: &str);
}
