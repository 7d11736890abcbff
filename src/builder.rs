use tracing::trace;

use crate::error::{ QsError, Result };
use crate::node::{ Map, Node, NodeKind };

/// 把 `value` 按路径段插入到 `root` 中
///
/// - `[f]`          => `f = value`
/// - `[f, ""]`      => `f` 为 List，追加 value
/// - `[f, "", a]`   => `f` 为 Map 组成的 List
/// - `[f, a, ...]`  => `f` 为 Map，继续向下
///
/// 只支持一层 List 嵌套 Map，`f[][]`、`f[][][a]` 之类的多层 List 不支持：
/// 空 key 上的追加会被丢弃。
///
/// 按下标循环向下走，不递归，路径深度不受栈大小限制。
pub fn insert(root: &mut Map, segments: &[String], value: String) -> Result<()> {
    let mut container = root;
    let mut i = 0;

    while let Some(first) = segments.get(i) {
        let key = trim_quotes(first);
        let rest = &segments[i + 1..];

        match rest {
            [] => {
                return set_scalar(container, key, &segments[..=i], value);
            }
            [next] if next.is_empty() => {
                return push_scalar(container, key, &segments[..=i], value);
            }
            // `key[][sub]...`
            [next, sub, ..] if next.is_empty() && !sub.is_empty() => {
                let items = match
                    container.entry(key.to_string()).or_insert_with(|| Node::List(Vec::new()))
                {
                    Node::List(items) => items,
                    other => {
                        return Err(conflict(&segments[..=i], NodeKind::List, other.kind()));
                    }
                };
                container = match list_element(items, trim_quotes(sub)) {
                    Node::Map(element) => element,
                    other => {
                        return Err(conflict(&segments[..i + 2], NodeKind::Map, other.kind()));
                    }
                };
                i += 2;
            }
            // `key[sub]...`，包括不支持的 `key[][]...`
            _ => {
                container = match
                    container.entry(key.to_string()).or_insert_with(|| Node::Map(Map::new()))
                {
                    Node::Map(children) => children,
                    other => {
                        return Err(conflict(&segments[..=i], NodeKind::Map, other.kind()));
                    }
                };
                i += 1;
            }
        }
    }

    Ok(())
}

/// 最后一个元素是 Map 且还没有 `next_key` 时复用它，否则追加一个新 Map
///
/// 所以 `f[][a]=1&f[][b]=2&f[][a]=3` => `[{a:1, b:2}, {a:3}]`
fn list_element<'a>(items: &'a mut Vec<Node>, next_key: &str) -> &'a mut Node {
    let reuse = matches!(items.last(), Some(Node::Map(last)) if !last.contains_key(next_key));
    if !reuse {
        items.push(Node::Map(Map::new()));
    }
    let last = items.len() - 1;
    &mut items[last]
}

/// 去掉首尾的 `'` 和 `"`
fn trim_quotes(segment: &str) -> &str {
    segment.trim_matches(|c: char| c == '\'' || c == '"')
}

/// 出错时才拼接路径：`["f", "", "a"]` => `f[][a]`
fn path_of(segments: &[String]) -> String {
    let mut path = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let key = trim_quotes(segment);
        if i == 0 {
            path.push_str(key);
        } else {
            path.push('[');
            path.push_str(key);
            path.push(']');
        }
    }
    path
}

fn conflict(segments: &[String], expected: NodeKind, found: NodeKind) -> QsError {
    QsError::TypeConflict { path: path_of(segments), expected, found }
}

/// 标量：同 key 后写覆盖，已有 List / Map 则冲突
fn set_scalar(container: &mut Map, key: &str, segments: &[String], value: String) -> Result<()> {
    if let Some(existing) = container.get(key) {
        if !existing.is_scalar() {
            return Err(conflict(segments, NodeKind::Scalar, existing.kind()));
        }
    }
    container.insert(key.to_string(), Node::Scalar(value));
    Ok(())
}

/// `key[]`
fn push_scalar(container: &mut Map, key: &str, segments: &[String], value: String) -> Result<()> {
    if key.is_empty() {
        trace!(depth = segments.len(), "nested list is not supported, value dropped");
        return Ok(());
    }

    match container.entry(key.to_string()).or_insert_with(|| Node::List(Vec::new())) {
        Node::List(items) => {
            items.push(Node::Scalar(value));
            Ok(())
        }
        other => Err(conflict(segments, NodeKind::List, other.kind())),
    }
}
