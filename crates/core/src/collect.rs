// crates/core/src/collect.rs
use serde_json::Value;

use crate::error::Result;
use crate::node::{DepthGuard, Node};

/// Expected shape of a matched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    Mapping,
}

impl Shape {
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Mapping => value.is_object(),
        }
    }
}

/// A key to search for and the shape its value must have to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyedSearch {
    pub key: &'static str,
    pub shape: Shape,
}

impl KeyedSearch {
    pub const URL: Self = Self::new("url", Shape::String);
    pub const TABLE: Self = Self::new("table", Shape::Mapping);
    pub const IMAGE: Self = Self::new("inlineObjectElement", Shape::Mapping);

    #[must_use]
    pub const fn new(key: &'static str, shape: Shape) -> Self {
        Self { key, shape }
    }

    /// Every matching value under `root`, in depth-first order.
    ///
    /// A matched value is recorded and not searched further; a key whose value
    /// has the wrong shape is searched like any other entry. Duplicates are
    /// kept.
    ///
    /// # Errors
    /// Returns [`crate::AnalyzeError::DepthExceeded`] when the tree is nested
    /// deeper than `max_depth`.
    pub fn collect<'a>(&self, root: &'a Value, max_depth: usize) -> Result<Vec<&'a Value>> {
        let mut found = Vec::new();
        self.visit(root, DepthGuard::new(max_depth), &mut found)?;
        Ok(found)
    }

    fn visit<'a>(&self, value: &'a Value, guard: DepthGuard, found: &mut Vec<&'a Value>) -> Result<()> {
        match Node::of(value) {
            Node::Mapping(map) => {
                let guard = guard.descend()?;
                for (key, child) in map {
                    if key == self.key && self.shape.matches(child) {
                        found.push(child);
                    } else {
                        self.visit(child, guard, found)?;
                    }
                }
            }
            Node::Sequence(items) => {
                let guard = guard.descend()?;
                for item in items {
                    self.visit(item, guard, found)?;
                }
            }
            Node::Scalar(_) => {}
        }
        Ok(())
    }
}
