//! In-memory display tree for tests and non-browser embedders.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::host::{HostError, Node, RatingHost};
use crate::view::{ARIA_CHECKED, SELECTED_CLASS, STAR_COUNT, aria_label};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct Tree {
    host: MemoryNode,
    stars: Vec<MemoryNode>,
    template_builds: usize,
    writes: usize,
    dispatched: Vec<i32>,
    refuse_writes: bool,
}

impl Tree {
    fn node(&self, node: Node) -> Option<&MemoryNode> {
        match node {
            Node::Host => Some(&self.host),
            Node::Star(index) => self.stars.get(index),
        }
    }

    fn node_mut(&mut self, node: Node) -> Result<&mut MemoryNode, HostError> {
        if self.refuse_writes {
            return Err(HostError::Dom("writes refused".into()));
        }
        self.writes += 1;
        match HostError::check(node)? {
            Node::Host => Ok(&mut self.host),
            Node::Star(index) => self
                .stars
                .get_mut(index)
                .ok_or(HostError::MissingNode(node)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    tree: RefCell<Tree>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host element pre-populated with attributes, as if parsed from markup.
    #[must_use]
    pub fn with_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let host = Self::new();
        for (name, value) in attrs {
            host.set_external_attribute(name, Some(value));
        }
        host
    }

    /// Change a host attribute without going through the widget, the way
    /// markup edits or other scripts would.
    pub fn set_external_attribute(&self, name: &str, value: Option<&str>) {
        let mut tree = self.tree.borrow_mut();
        let attributes = &mut tree.host.attributes;
        match value {
            Some(text) => {
                attributes.insert(name.to_owned(), text.to_owned());
            }
            None => {
                attributes.remove(name);
            }
        }
    }

    /// Make every subsequent mutation fail.
    pub fn refuse_writes(&self, refuse: bool) {
        self.tree.borrow_mut().refuse_writes = refuse;
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.tree.borrow().stars.len() == STAR_COUNT
    }

    #[must_use]
    pub fn template_builds(&self) -> usize {
        self.tree.borrow().template_builds
    }

    /// Attribute and class mutations performed so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.tree.borrow().writes
    }

    #[must_use]
    pub fn dispatched(&self) -> Vec<i32> {
        self.tree.borrow().dispatched.clone()
    }

    #[must_use]
    pub fn star(&self, index: usize) -> Option<MemoryNode> {
        self.tree.borrow().stars.get(index).cloned()
    }

    #[must_use]
    pub fn selected_stars(&self) -> Vec<usize> {
        self.stars_where(|star| star.classes.contains(SELECTED_CLASS))
    }

    #[must_use]
    pub fn checked_stars(&self) -> Vec<usize> {
        self.stars_where(|star| {
            star.attributes
                .get(ARIA_CHECKED)
                .is_some_and(|v| v == "true")
        })
    }

    fn stars_where(&self, pred: impl Fn(&MemoryNode) -> bool) -> Vec<usize> {
        self.tree
            .borrow()
            .stars
            .iter()
            .enumerate()
            .filter(|&(_, star)| pred(star))
            .map(|(index, _)| index)
            .collect()
    }
}

impl RatingHost for MemoryHost {
    fn build_template(&self) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        if tree.refuse_writes {
            return Err(HostError::Template("writes refused".into()));
        }
        tree.template_builds += 1;
        tree.stars = (0..STAR_COUNT)
            .map(|index| {
                let mut star = MemoryNode::default();
                star.attributes.insert("role".into(), "radio".into());
                star.attributes.insert("aria-label".into(), aria_label(index));
                star.classes.insert("star".into());
                star
            })
            .collect();
        Ok(())
    }

    fn attribute(&self, node: Node, name: &str) -> Option<String> {
        self.tree.borrow().node(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: Node, name: &str, value: &str) -> Result<(), HostError> {
        self.tree
            .borrow_mut()
            .node_mut(node)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&self, node: Node, name: &str) -> Result<(), HostError> {
        self.tree.borrow_mut().node_mut(node)?.attributes.remove(name);
        Ok(())
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.tree
            .borrow()
            .node(node)
            .is_some_and(|n| n.classes.contains(class))
    }

    fn set_class(&self, node: Node, class: &str, on: bool) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        let target = tree.node_mut(node)?;
        if on {
            target.classes.insert(class.to_owned());
        } else {
            target.classes.remove(class);
        }
        Ok(())
    }

    fn dispatch_change(&self, value: i32) {
        self.tree.borrow_mut().dispatched.push(value);
    }
}
