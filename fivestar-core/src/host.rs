//! Display tree the widget renders into.
//!
//! The widget never touches a concrete DOM. It addresses two kinds of node,
//! the host element that carries the public attributes and the five stars
//! built by the template, and leaves ownership of the tree to the
//! implementation.

use crate::view::STAR_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Host,
    Star(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("node {0:?} is not part of the display tree")]
    MissingNode(Node),
    #[error("template could not be built: {0}")]
    Template(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl HostError {
    /// Reject star indices outside the fixed range.
    ///
    /// # Errors
    /// Returns [`HostError::MissingNode`] for `Star(i)` with `i >= 5`.
    pub const fn check(node: Node) -> Result<Node, Self> {
        match node {
            Node::Star(index) if index >= STAR_COUNT => Err(Self::MissingNode(node)),
            _ => Ok(node),
        }
    }
}

/// Retained-mode display tree used by the widget's render pass.
///
/// Methods take `&self`: dispatching the change notification may run host
/// listeners that call straight back into the widget, so implementations
/// keep any mutable state behind their own interior mutability.
pub trait RatingHost {
    /// Build the star template. Called at most once per widget.
    ///
    /// # Errors
    /// Returns an error when the tree cannot hold the template.
    fn build_template(&self) -> Result<(), HostError>;

    fn attribute(&self, node: Node, name: &str) -> Option<String>;

    /// # Errors
    /// Returns an error when the node is missing or the write is refused.
    fn set_attribute(&self, node: Node, name: &str, value: &str) -> Result<(), HostError>;

    /// # Errors
    /// Returns an error when the node is missing or the removal is refused.
    fn remove_attribute(&self, node: Node, name: &str) -> Result<(), HostError>;

    fn has_class(&self, node: Node, class: &str) -> bool;

    /// # Errors
    /// Returns an error when the node is missing or the class list rejects the token.
    fn set_class(&self, node: Node, class: &str, on: bool) -> Result<(), HostError>;

    /// Deliver the change notification through the host's own event
    /// mechanism. Non-bubbling; carries the new value.
    fn dispatch_change(&self, value: i32);
}

/// Read-before-write attribute sync. `None` removes the attribute.
/// Returns whether a write happened.
///
/// # Errors
/// Propagates the host's write failure.
pub fn sync_attribute<H: RatingHost + ?Sized>(
    host: &H,
    node: Node,
    name: &str,
    value: Option<&str>,
) -> Result<bool, HostError> {
    let current = host.attribute(node, name);
    if current.as_deref() == value {
        return Ok(false);
    }
    match value {
        Some(text) => host.set_attribute(node, name, text)?,
        None => host.remove_attribute(node, name)?,
    }
    Ok(true)
}

/// Read-before-write class toggle. Returns whether a write happened.
///
/// # Errors
/// Propagates the host's write failure.
pub fn sync_class<H: RatingHost + ?Sized>(
    host: &H,
    node: Node,
    class: &str,
    on: bool,
) -> Result<bool, HostError> {
    if host.has_class(node, class) == on {
        return Ok(false);
    }
    host.set_class(node, class, on)?;
    Ok(true)
}
