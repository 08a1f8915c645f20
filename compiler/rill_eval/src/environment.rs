//! Environment for variable scoping in the evaluator.
//!
//! A persistent, immutable chain of bindings. Extending produces a new
//! head that points at the unchanged parent, so the same base environment
//! can be extended any number of times independently; parents are shared
//! via `Rc` and never mutated or freed while a child still references
//! them.

use std::rc::Rc;

use rill_ir::Name;

use crate::value::Value;

/// A single (name, value) association stored in one chain link.
#[derive(Clone, Debug)]
struct Binding {
    name: Name,
    value: Value,
}

/// One link of the chain: exactly one binding plus the shared parent.
#[derive(Debug)]
struct Frame {
    binding: Binding,
    parent: Environment,
}

/// Immutable environment: either the canonical empty sentinel or one
/// binding plus a reference-counted parent. There is no other shape, and
/// no mutation operation exists.
///
/// `extend` is O(1); `lookup` walks the chain head-first, so the innermost
/// binding for a name shadows any outer one.
#[derive(Clone, Debug, Default)]
pub struct Environment(Option<Rc<Frame>>);

impl Environment {
    /// The canonical empty environment.
    pub fn empty() -> Self {
        Environment(None)
    }

    /// Whether this is the empty sentinel. A tag check, not a lookup.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Return a new environment whose first binding is `(name, value)`
    /// and whose parent is `self`. Does not modify `self`.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value) -> Self {
        Environment(Some(Rc::new(Frame {
            binding: Binding { name, value },
            parent: self.clone(),
        })))
    }

    /// Look up a name, innermost binding first.
    ///
    /// Returns `None` when the chain is exhausted; the evaluator turns
    /// that into an `UndefinedVariable` error with the resolved name.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self;
        while let Some(frame) = &current.0 {
            if frame.binding.name == name {
                return Some(frame.binding.value);
            }
            current = &frame.parent;
        }
        None
    }

    /// Number of links in the chain, shadowed bindings included.
    pub fn depth(&self) -> usize {
        let mut depth = 0usize;
        let mut current = self;
        while let Some(frame) = &current.0 {
            depth = depth.saturating_add(1);
            current = &frame.parent;
        }
        depth
    }
}
