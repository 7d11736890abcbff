use indexmap::IndexMap;

use crate::node::{ Map, Node };

/// 多值参数：key => [value, ...]，保持插入顺序
pub type Params = IndexMap<String, Vec<String>>;

/// 把参数编码为表单字符串
///
/// 每个 value 输出一次 `key=value`，多值 key 会重复出现：
/// `{first: [value], multi: ["foo bar", baz]}` => `first=value&multi=foo+bar&multi=baz`
pub fn encode(params: &Params) -> String {
    encode_pairs(params)
}

/// `encode` 的别名
pub fn http_build_query(params: &Params) -> String {
    encode(params)
}

/// 对任意 `(key, values)` 序列编码，按迭代顺序输出
pub fn encode_pairs<I, K, V, S>(params: I) -> String
    where I: IntoIterator<Item = (K, V)>, K: AsRef<str>, V: IntoIterator<Item = S>, S: AsRef<str>
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in params {
        for value in values {
            serializer.append_pair(key.as_ref(), value.as_ref());
        }
    }
    serializer.finish()
}

/// 把只有一层的解码结果转回参数
///
/// Scalar => `key`，元素全是 Scalar 的 List => `key[]`，
/// 这样重新编码再解码能得到同样的结构。含有 Map 或嵌套 List 时返回 `None`。
pub fn params_from_tree(tree: &Map) -> Option<Params> {
    let mut params = Params::with_capacity(tree.len());
    for (key, node) in tree {
        match node {
            Node::Scalar(value) => {
                params.insert(key.clone(), vec![value.clone()]);
            }
            Node::List(items) => {
                let values = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()?;
                params.insert(format!("{}[]", key), values);
            }
            Node::Map(_) => {
                return None;
            }
        }
    }
    Some(params)
}
