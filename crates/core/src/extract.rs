// crates/core/src/extract.rs
use serde_json::Value;

use crate::error::Result;
use crate::node::{DepthGuard, Node};

const CONTENT_KEY: &str = "content";

/// Concatenates every `content` string under `root`, in depth-first pre-order.
///
/// A mapping's own `content` string is emitted before any of its children are
/// visited, so a `content` sequence nested in the same mapping follows it.
///
/// # Errors
/// Returns [`crate::AnalyzeError::DepthExceeded`] when the tree is nested
/// deeper than `max_depth`.
pub fn raw_content(root: &Value, max_depth: usize) -> Result<String> {
    let mut out = String::new();
    push_content(root, DepthGuard::new(max_depth), &mut out)?;
    Ok(out)
}

fn push_content(value: &Value, guard: DepthGuard, out: &mut String) -> Result<()> {
    let node = Node::of(value);
    if let Node::Mapping(map) = node
        && let Some(Value::String(text)) = map.get(CONTENT_KEY)
    {
        out.push_str(text);
    }
    if node.is_scalar() {
        return Ok(());
    }

    let guard = guard.descend()?;
    for child in node.children() {
        push_content(child, guard, out)?;
    }
    Ok(())
}

/// Text of every row in `table["tableRows"]`, one string per row.
///
/// A table without a `tableRows` sequence has no rows.
///
/// # Errors
/// Propagates the depth limit from [`raw_content`].
pub fn row_texts(table: &Value, max_depth: usize) -> Result<Vec<String>> {
    let Some(Value::Array(rows)) = table.get("tableRows") else {
        return Ok(Vec::new());
    };
    rows.iter().map(|row| raw_content(row, max_depth)).collect()
}
