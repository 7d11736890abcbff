use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// 有序 Map，保持插入顺序
pub type Map = IndexMap<String, Node>;

/// 节点种类，用于类型冲突报告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    List,
    Map,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Scalar => "scalar",
            NodeKind::List => "list",
            NodeKind::Map => "map",
        };
        write!(f, "{}", s)
    }
}

/// 解码结果树的节点
///
/// - `f=m`      => Scalar
/// - `f[]=m`    => List
/// - `f[a]=m`   => Map
///
/// 序列化时不带标签：Scalar 输出字符串，List 输出数组，Map 输出对象（保持顺序）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(String),
    List(Vec<Node>),
    Map(Map),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::List(_) => NodeKind::List,
            Node::Map(_) => NodeKind::Map,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// 按 key 取子节点，仅对 Map 有效
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

impl From<Map> for Node {
    fn from(map: Map) -> Self {
        Node::Map(map)
    }
}

/// 以 JSON 形式输出
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

/// 用显式栈逐层拆开子节点，很深的树也不会在析构时栈溢出
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        take_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            take_children(&mut node, &mut stack);
        }
    }
}

fn take_children(node: &mut Node, stack: &mut Vec<Node>) {
    match node {
        Node::Scalar(_) => {}
        Node::List(items) => stack.extend(items.drain(..)),
        Node::Map(map) => stack.extend(map.drain(..).map(|(_, child)| child)),
    }
}
