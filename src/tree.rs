//! In-memory element tree implementation
//!
//! This module provides `MemoryTree`, a concrete [`ElementTree`] backed by
//! a flat element map. It is the tree used by unit tests and by callers
//! that have no rendering layer of their own; production embedders are
//! expected to implement [`ElementTree`] over their real node type.

use crate::{ElementError, ElementTree, NodeId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single element: parent link, ordered children, attribute map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ElementData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: HashMap<String, String>,
}

/// In-memory tree of attribute-bearing elements.
///
/// Elements are created detached and wired together with
/// [`MemoryTree::append_child`]. Every element has at most one parent and
/// the structure is kept acyclic, so upward traversals always terminate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTree {
    elements: HashMap<NodeId, ElementData>,
}

impl MemoryTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new detached element and return its handle
    pub fn create_element(&mut self) -> NodeId {
        let id = NodeId::new();
        self.elements.insert(id, ElementData::default());
        id
    }

    /// Check whether the tree contains an element
    pub fn contains(&self, id: NodeId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Number of elements in the tree
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the tree has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A child that is already attached elsewhere is detached first, so
    /// this has move semantics like a DOM `appendChild`. Attaching an
    /// element to itself or to one of its own descendants is rejected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.elements.contains_key(&parent) {
            return Err(ElementError::ElementNotFound(parent.as_uuid()));
        }
        if !self.elements.contains_key(&child) {
            return Err(ElementError::ElementNotFound(child.as_uuid()));
        }
        if parent == child {
            return Err(ElementError::TreeStructure(format!(
                "cannot attach element {child} to itself"
            )));
        }

        // Reject attachment below the child's own subtree
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(ElementError::TreeStructure(format!(
                    "attaching {child} under {parent} would create a cycle"
                )));
            }
            cursor = self.parent(id);
        }

        self.detach(child)?;
        self.elements
            .get_mut(&parent)
            .ok_or(ElementError::ElementNotFound(parent.as_uuid()))?
            .children
            .push(child);
        self.elements
            .get_mut(&child)
            .ok_or(ElementError::ElementNotFound(child.as_uuid()))?
            .parent = Some(parent);
        Ok(())
    }

    /// Detach an element from its parent, making it a root
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        let data = self
            .elements
            .get_mut(&id)
            .ok_or(ElementError::ElementNotFound(id.as_uuid()))?;
        let Some(old_parent) = data.parent.take() else {
            return Ok(());
        };
        if let Some(parent_data) = self.elements.get_mut(&old_parent) {
            parent_data.children.retain(|c| *c != id);
        }
        Ok(())
    }

    /// Get the parent of an element (None for roots and unknown handles)
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.elements.get(&id).and_then(|e| e.parent)
    }

    /// Get the children of an element (empty for leaves and unknown handles)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.elements
            .get(&id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Read a named attribute (None if the element is unknown or the
    /// attribute is unset)
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.elements
            .get(&id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Set a named attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        let data = self
            .elements
            .get_mut(&id)
            .ok_or(ElementError::ElementNotFound(id.as_uuid()))?;
        data.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    /// Remove a named attribute from an element
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<()> {
        let data = self
            .elements
            .get_mut(&id)
            .ok_or(ElementError::ElementNotFound(id.as_uuid()))?;
        data.attributes.remove(name);
        Ok(())
    }
}

impl ElementTree for MemoryTree {
    type Ref = NodeId;

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        MemoryTree::parent(self, element)
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        MemoryTree::attribute(self, element, name)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        // Stale handles behave as absent elements; drop the write
        if MemoryTree::set_attribute(self, element, name, value).is_err() {
            tracing::warn!("dropping attribute write {name:?} on unknown element {element}");
        }
    }
}
