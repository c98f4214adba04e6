//! Lazy rose trees.
//!
//! A [`Tree`] stores its children as a [`Seq`], so a subtree is only built
//! when a traversal reaches it. Trees grown with [`Tree::unfold`] may be
//! infinitely deep; [`Tree::prune`] cuts them to a known depth, after which
//! whole-tree folds become available.

use std::fmt;
use std::rc::Rc;

use crate::error::SeqError;
use crate::extent::Extent;
use crate::seq::{Cursor, Seq};

/// A node label plus a lazy sequence of subtrees.
pub struct Tree<T> {
    value: T,
    children: Seq<Tree<T>>,
    depth_bound: Option<usize>,
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            children: self.children.clone(),
            depth_bound: self.depth_bound,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("value", &self.value)
            .field("depth_bound", &self.depth_bound)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Tree<T> {
    /// A node with no children.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Seq::empty(),
            depth_bound: Some(0),
        }
    }

    /// A node with the given, already-built children.
    pub fn new(value: T, children: Vec<Tree<T>>) -> Self {
        let depth_bound = children
            .iter()
            .try_fold(0, |deepest, child| {
                child.depth_bound.map(|d| deepest.max(d + 1))
            });
        Self {
            value,
            children: Seq::from_vec(children),
            depth_bound,
        }
    }

    /// Grows a tree from `root`, computing each node's child labels with
    /// `expand` only when that node's children are traversed.
    ///
    /// The tree may be infinitely deep. It has no depth bound until pruned.
    pub fn unfold<F>(root: T, expand: F) -> Self
    where
        F: Fn(&T) -> Vec<T> + 'static,
    {
        Self::unfold_shared(root, Rc::new(expand))
    }

    fn unfold_shared(root: T, expand: Rc<dyn Fn(&T) -> Vec<T>>) -> Self {
        let parent = root.clone();
        let children = Seq::from_fn(Extent::Unknown, move || {
            let expand = Rc::clone(&expand);
            expand(&parent)
                .into_iter()
                .map(move |child| Tree::unfold_shared(child, Rc::clone(&expand)))
        });
        Self {
            value: root,
            children,
            depth_bound: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &Seq<Tree<T>> {
        &self.children
    }

    /// Maximum depth below this node, if structurally known.
    pub fn depth_bound(&self) -> Option<usize> {
        self.depth_bound
    }

    /// A view of this tree in which nodes `depth` levels down have no children.
    pub fn prune(&self, depth: usize) -> Self {
        let children = if depth == 0 {
            Seq::empty()
        } else {
            self.children.map(move |child: Tree<T>| child.prune(depth - 1))
        };
        Self {
            value: self.value.clone(),
            children,
            depth_bound: Some(self.depth_bound.map_or(depth, |d| d.min(depth))),
        }
    }

    /// Relabels every node lazily.
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.map_shared(Rc::new(f))
    }

    fn map_shared<U: Clone + 'static>(&self, f: Rc<dyn Fn(&T) -> U>) -> Tree<U> {
        let value = f(&self.value);
        let children = self
            .children
            .map(move |child: Tree<T>| child.map_shared(Rc::clone(&f)));
        Tree {
            value,
            children,
            depth_bound: self.depth_bound,
        }
    }

    // ========================================================================
    // Traversals
    // ========================================================================

    /// Labels in depth-first, parents-before-children order.
    ///
    /// Lazy: works on infinitely deep trees, descending as elements are
    /// pulled. Memory grows with the depth of the current path only.
    pub fn preorder(&self) -> Seq<T> {
        let root = self.clone();
        Seq::from_fn(Extent::Unknown, move || Preorder {
            pending: Some(root.clone()),
            stack: Vec::new(),
        })
    }

    /// Labels grouped by depth, root level first.
    pub fn levels(&self) -> Seq<Vec<T>> {
        let root = self.clone();
        let extent = self
            .depth_bound
            .map_or(Extent::Unknown, |d| Extent::AtMost(d.saturating_add(1)));
        Seq::from_fn(extent, move || Levels {
            frontier: vec![root.clone()],
        })
    }

    /// Folds bottom-up: `f` receives a label and the folded children.
    ///
    /// Requires a depth bound, and every visited node must have a finite
    /// set of children.
    pub fn fold<A, F>(&self, f: F) -> Result<A, SeqError>
    where
        F: Fn(&T, Vec<A>) -> A,
    {
        if self.depth_bound.is_none() {
            return Err(SeqError::invalid_operation("fold", Extent::Unknown));
        }
        self.fold_with(&f)
    }

    fn fold_with<A, F>(&self, f: &F) -> Result<A, SeqError>
    where
        F: Fn(&T, Vec<A>) -> A,
    {
        self.children.ensure_traversable("fold")?;
        let mut folded = Vec::new();
        for child in &self.children {
            folded.push(child.fold_with(f)?);
        }
        Ok(f(&self.value, folded))
    }

    /// Number of nodes.
    pub fn size(&self) -> Result<usize, SeqError> {
        self.fold(|_, children: Vec<usize>| 1 + children.iter().sum::<usize>())
    }

    /// Labels of childless nodes, left to right.
    pub fn leaves(&self) -> Result<Vec<T>, SeqError> {
        self.fold(|value, children: Vec<Vec<T>>| {
            if children.is_empty() {
                vec![value.clone()]
            } else {
                children.concat()
            }
        })
    }
}

struct Preorder<T> {
    pending: Option<Tree<T>>,
    stack: Vec<Cursor<Tree<T>>>,
}

impl<T: 'static> Iterator for Preorder<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(root) = self.pending.take() {
            self.stack.push(root.children.cursor());
            return Some(root.value);
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    self.stack.push(node.children.cursor());
                    return Some(node.value);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

struct Levels<T> {
    frontier: Vec<Tree<T>>,
}

impl<T: 'static> Iterator for Levels<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.frontier.is_empty() {
            return None;
        }
        let mut values = Vec::with_capacity(self.frontier.len());
        let mut next = Vec::new();
        for node in std::mem::take(&mut self.frontier) {
            values.push(node.value);
            next.extend(node.children.cursor());
        }
        self.frontier = next;
        Some(values)
    }
}
