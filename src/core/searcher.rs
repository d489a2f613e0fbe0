use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use super::{DataKey, TooltipIndex};

/// Strategy mapping `(data, index)` to the record a tooltip reads from.
///
/// The strategy is chosen once per chart, so payload resolution never
/// inspects data shapes at runtime to decide how an index is addressed.
pub trait TooltipPayloadSearcher: fmt::Debug + Send + Sync {
    fn search<'a>(&self, data: &'a [Value], index: &TooltipIndex) -> Option<&'a Value>;

    /// Position of `index` inside per-item sequences that are not records.
    fn position(&self, index: &TooltipIndex) -> Option<usize> {
        index.as_position()
    }

    fn search_value<'a>(
        &self,
        data: &'a [Value],
        index: &TooltipIndex,
        data_key: Option<&DataKey>,
    ) -> Option<&'a Value> {
        let record = self.search(data, index)?;
        data_key?.value_in(record)
    }
}

/// Serializable selector for the built-in searchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearcherKind {
    #[default]
    Array,
    Tree,
}

/// Flat datasets: the index is a row position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTooltipSearcher;

impl TooltipPayloadSearcher for ArrayTooltipSearcher {
    fn search<'a>(&self, data: &'a [Value], index: &TooltipIndex) -> Option<&'a Value> {
        data.get(index.as_position()?)
    }
}

/// Tree datasets: the index is a path of `[n]` positions and field names.
///
/// A path starting with `[n]` selects the n-th top-level record. A path
/// starting with a field name is resolved from the first record, which is
/// taken as the tree root (`"children[0]children[1]"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeTooltipSearcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathSegment<'a> {
    Field(&'a str),
    Position(usize),
}

impl TooltipPayloadSearcher for TreeTooltipSearcher {
    fn search<'a>(&self, data: &'a [Value], index: &TooltipIndex) -> Option<&'a Value> {
        let segments = parse_tree_path(index.as_str())?;
        let mut rest = segments.as_slice();
        let mut current = match rest.first()? {
            PathSegment::Position(position) => {
                rest = &rest[1..];
                data.get(*position)?
            }
            PathSegment::Field(_) => data.first()?,
        };

        for segment in rest {
            current = match (segment, current) {
                (PathSegment::Field(name), Value::Object(map)) => map.get(*name)?,
                (PathSegment::Position(position), Value::Array(items)) => items.get(*position)?,
                _ => return None,
            };
        }
        Some(current)
    }

    fn position(&self, index: &TooltipIndex) -> Option<usize> {
        match parse_tree_path(index.as_str())?.as_slice() {
            [PathSegment::Position(position)] => Some(*position),
            _ => index.as_position(),
        }
    }
}

impl SearcherKind {
    #[must_use]
    pub fn searcher(self) -> Arc<dyn TooltipPayloadSearcher> {
        match self {
            Self::Array => Arc::new(ArrayTooltipSearcher),
            Self::Tree => Arc::new(TreeTooltipSearcher),
        }
    }
}

fn parse_tree_path(path: &str) -> Option<SmallVec<[PathSegment<'_>; 8]>> {
    let mut segments = SmallVec::new();
    let bytes = path.as_bytes();
    let mut name_start = 0;
    let mut cursor = 0;

    while cursor < bytes.len() {
        match bytes[cursor] {
            b'.' => {
                push_field(&mut segments, &path[name_start..cursor]);
                cursor += 1;
                name_start = cursor;
            }
            b'[' => {
                push_field(&mut segments, &path[name_start..cursor]);
                let close = path[cursor..].find(']')? + cursor;
                let position = path[cursor + 1..close].trim().parse().ok()?;
                segments.push(PathSegment::Position(position));
                cursor = close + 1;
                name_start = cursor;
            }
            _ => cursor += 1,
        }
    }
    push_field(&mut segments, &path[name_start..]);

    if segments.is_empty() {
        return None;
    }
    Some(segments)
}

fn push_field<'a>(segments: &mut SmallVec<[PathSegment<'a>; 8]>, name: &'a str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    match name.parse::<usize>() {
        Ok(position) => segments.push(PathSegment::Position(position)),
        Err(_) => segments.push(PathSegment::Field(name)),
    }
}
