//! Hierarchical error collections addressed by field path
//!
//! An [`ErrorCollection`] is a tree keyed by path segments. Each node
//! carries the records attached exactly at one of its keys ("local"
//! errors) and, independently, a lazily created child collection for
//! records attached deeper under the same key. Collections are built once
//! from a flat record list and then queried by form-rendering code; two
//! collections can be combined into a read-only merged view that copies
//! nothing.
//!
//! Handles are reference counted and single-threaded: cloning one is
//! cheap and aliases the same underlying node, which is what makes child
//! navigation return live sub-trees rather than snapshots.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::path::{self, ErrorPath};
use crate::record::ErrorRecord;

thread_local! {
    /// The per-thread "nothing here" collection returned for unpopulated
    /// paths.
    static EMPTY: ErrorCollection = ErrorCollection {
        inner: Rc::new(Inner::Empty),
    };
}

/// A tree of validation errors keyed by path segments.
///
/// Built from a flat list with [`ErrorCollection::from_records`], then
/// queried per field path via [`get`](ErrorCollection::get) /
/// [`has`](ErrorCollection::has) / [`last`](ErrorCollection::last),
/// navigated with [`children`](ErrorCollection::children) and combined
/// with [`merge`](ErrorCollection::merge).
///
/// The value is a cheap clonable handle; clones alias the same node, so
/// records added through one handle are visible through the others.
#[derive(Debug, Clone)]
pub struct ErrorCollection {
    inner: Rc<Inner>,
}

#[derive(Debug)]
enum Inner {
    /// The shared empty collection. Carries no node at all, so it cannot
    /// be written to even through a leaked handle.
    Empty,
    /// A regular mutable node.
    Plain(RefCell<Node>),
    /// A read-only composite over two collections; holds handles, never
    /// copies of the data.
    Merged(ErrorCollection, ErrorCollection),
}

#[derive(Debug, Default)]
struct Node {
    /// Records attached exactly at this node, keyed by segment, in
    /// insertion order.
    local: IndexMap<String, Vec<ErrorRecord>>,
    /// Sub-collections for records attached deeper, keyed by segment.
    ///
    /// A key may hold local records and a child collection at the same
    /// time; the two slots never interact.
    children: IndexMap<String, ErrorCollection>,
}

impl Default for ErrorCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorCollection {
    /// Create a fresh, empty, writable collection.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner::Plain(RefCell::new(Node::default()))),
        }
    }

    /// Build a collection from a flat record list, preserving input order.
    ///
    /// Each record is routed by its dotted path; a record without a path
    /// is filed under the empty-string key. Records sharing a path
    /// accumulate in that path's slot in input order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ErrorRecord>,
    {
        let collection = Self::new();
        for record in records {
            let segments = path::split(record.path.as_deref().unwrap_or(""));
            collection.add_error(&segments, record);
        }
        collection
    }

    /// The shared empty collection.
    ///
    /// [`children`](ErrorCollection::children) returns this exact instance
    /// (compare with [`ptr_eq`](ErrorCollection::ptr_eq)) whenever the
    /// requested path was never populated, so repeated misses are
    /// allocation-free and identity-comparable. One instance per thread.
    pub fn empty() -> Self {
        EMPTY.with(Self::clone)
    }

    /// Whether two handles alias the same underlying collection.
    pub fn ptr_eq(&self, other: &ErrorCollection) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Attach `record` at the slot named by `segments`, creating
    /// intermediate child collections as needed.
    ///
    /// An empty `segments` slice is a caller contract violation: debug
    /// builds assert, release builds ignore the call. On a merged
    /// collection the write is forwarded to the left operand only, and
    /// the shared empty collection ignores writes entirely; callers that
    /// need to keep adding records should hold on to the plain collection
    /// itself rather than write through a merged handle.
    pub fn add_error<S: AsRef<str>>(&self, segments: &[S], record: ErrorRecord) {
        debug_assert!(
            !segments.is_empty(),
            "add_error requires at least one path segment"
        );

        match &*self.inner {
            Inner::Empty => {}
            Inner::Merged(left, _) => left.add_error(segments, record),
            Inner::Plain(node) => {
                let Some((first, rest)) = segments.split_first() else {
                    return;
                };
                let key = first.as_ref();

                if rest.is_empty() {
                    node.borrow_mut()
                        .local
                        .entry(key.to_string())
                        .or_default()
                        .push(record);
                    return;
                }

                let child = node
                    .borrow_mut()
                    .children
                    .entry(key.to_string())
                    .or_insert_with(ErrorCollection::new)
                    .clone();
                child.add_error(rest, record);
            }
        }
    }

    /// The records attached exactly at `path`, in the order they were
    /// added.
    ///
    /// Returns `None` when the slot was never populated; a slot that only
    /// exists as a child branch (records attached deeper, none exactly
    /// here) also reports `None`. On a merged collection the left side's
    /// records come first, and the result is `None` only when both sides
    /// report `None`.
    pub fn get(&self, path: impl ErrorPath) -> Option<Vec<ErrorRecord>> {
        self.get_segments(&path.segments())
    }

    fn get_segments(&self, segments: &[String]) -> Option<Vec<ErrorRecord>> {
        match &*self.inner {
            Inner::Empty => None,
            Inner::Plain(node) => {
                let (first, rest) = segments.split_first()?;
                let node = node.borrow();
                if rest.is_empty() {
                    return node.local.get(first).cloned();
                }
                let child = node.children.get(first)?.clone();
                drop(node);
                child.get_segments(rest)
            }
            Inner::Merged(left, right) => {
                match (left.get_segments(segments), right.get_segments(segments)) {
                    (None, None) => None,
                    (left, right) => {
                        let mut records = left.unwrap_or_default();
                        records.extend(right.unwrap_or_default());
                        Some(records)
                    }
                }
            }
        }
    }

    /// Whether any record is attached exactly at `path`.
    ///
    /// Descendant paths are not considered: a key holding only a child
    /// collection reports `false`.
    pub fn has(&self, path: impl ErrorPath) -> bool {
        self.has_segments(&path.segments())
    }

    fn has_segments(&self, segments: &[String]) -> bool {
        match &*self.inner {
            Inner::Empty => false,
            Inner::Plain(node) => {
                let Some((first, rest)) = segments.split_first() else {
                    return false;
                };
                let node = node.borrow();
                if rest.is_empty() {
                    return node
                        .local
                        .get(first)
                        .is_some_and(|records| !records.is_empty());
                }
                let Some(child) = node.children.get(first).cloned() else {
                    return false;
                };
                drop(node);
                child.has_segments(rest)
            }
            Inner::Merged(left, right) => {
                left.has_segments(segments) || right.has_segments(segments)
            }
        }
    }

    /// The message of the most recently added record at exactly `path`.
    ///
    /// On a merged collection the left operand takes precedence: the
    /// right side is only consulted when the left has no record at that
    /// path at all.
    pub fn last(&self, path: impl ErrorPath) -> Option<String> {
        self.last_segments(&path.segments())
    }

    fn last_segments(&self, segments: &[String]) -> Option<String> {
        match &*self.inner {
            Inner::Merged(left, right) => left
                .last_segments(segments)
                .or_else(|| right.last_segments(segments)),
            _ => self
                .get_segments(segments)
                .and_then(|records| records.last().map(|record| record.message.clone())),
        }
    }

    /// The sub-collection rooted at `path`.
    ///
    /// Returns the actual child node as a handle, not a copy: records
    /// added to the parent afterwards stay visible through it for
    /// branches that already existed. Returns the shared empty collection
    /// (see [`empty`](ErrorCollection::empty)) when any segment along the
    /// way was never populated. On a merged collection this merges both
    /// sides' sub-collections, lazily: nothing is traversed until the
    /// result is queried.
    pub fn children(&self, path: impl ErrorPath) -> ErrorCollection {
        self.children_segments(&path.segments())
    }

    fn children_segments(&self, segments: &[String]) -> ErrorCollection {
        match &*self.inner {
            Inner::Empty => self.clone(),
            Inner::Plain(node) => {
                let Some((first, rest)) = segments.split_first() else {
                    return ErrorCollection::empty();
                };
                let Some(child) = node.borrow().children.get(first).cloned() else {
                    return ErrorCollection::empty();
                };
                if rest.is_empty() {
                    child
                } else {
                    child.children_segments(rest)
                }
            }
            Inner::Merged(left, right) => left
                .children_segments(segments)
                .merge(&right.children_segments(segments)),
        }
    }

    /// A read-only composite over `self` and `other`.
    ///
    /// Neither operand is copied or mutated, and records added to either
    /// one later remain visible through the composite. Reads consult both
    /// sides: `get` concatenates left then right, `has` is true when
    /// either side has the slot, `last` prefers the left operand, and
    /// `children` merges the two sub-collections. Writes through the
    /// composite go to the left operand only. Chain merges left-to-right;
    /// `last` precedence is defined by that order and does not survive
    /// reordering.
    pub fn merge(&self, other: &ErrorCollection) -> ErrorCollection {
        // Merging nothing into nothing stays the shared empty collection.
        if let (Inner::Empty, Inner::Empty) = (&*self.inner, &*other.inner) {
            return self.clone();
        }
        ErrorCollection {
            inner: Rc::new(Inner::Merged(self.clone(), other.clone())),
        }
    }

    /// Every record attached directly at this node, across all of its
    /// keys, in key insertion order.
    ///
    /// Child collections are not flattened in; nested records stay under
    /// their own nodes.
    pub fn all(&self) -> Vec<ErrorRecord> {
        match &*self.inner {
            Inner::Empty => Vec::new(),
            Inner::Plain(node) => node
                .borrow()
                .local
                .values()
                .flat_map(|records| records.iter().cloned())
                .collect(),
            Inner::Merged(left, right) => {
                let mut records = left.all();
                records.extend(right.all());
                records
            }
        }
    }
}
