use tracing::trace;

use crate::builder;
use crate::codec::decode_component;
use crate::error::{ QsError, Result };
use crate::node::Map;
use crate::segment::segment;

/// 把表单编码字符串解析为嵌套树
///
/// ```text
/// f1=m&f2=n            => {f1: m, f2: n}
/// f[a]=m&f[b]=n        => {f: {a: m, b: n}}
/// f[a][a]=m&f[a][b]=n  => {f: {a: {a: m, b: n}}}
/// f[]=m&f[]=n          => {f: [m, n]}
/// f[a][]=m&f[a][]=n    => {f: {a: [m, n]}}
/// f=m&f[a]=n           => TypeConflict
/// a .[[b=c             => {a___[b: c}
/// ```
///
/// 没有 `=`、`=` 在开头、key 为空或以 `[` 开头的键值对会被跳过。
/// 出现任何错误时整体失败，不返回部分结果。
pub fn decode(input: &str) -> Result<Map> {
    let mut root = Map::new();

    for (index, pair) in input.split('&').enumerate() {
        let pos = match pair.find('=') {
            Some(pos) if pos > 0 => pos,
            _ => {
                if !pair.is_empty() {
                    trace!(index, pair, "pair without key skipped");
                }
                continue;
            }
        };

        let malformed = || QsError::MalformedPercentEncoding {
            pair: index,
            input: pair.to_string(),
        };

        let key = decode_component(&pair[..pos], true).ok_or_else(malformed)?;
        let Some(segments) = segment(&key) else {
            trace!(index, key = %key, "invalid key skipped");
            continue;
        };

        let value = decode_component(&pair[pos + 1..], true).ok_or_else(malformed)?;
        builder::insert(&mut root, &segments, value)?;
    }

    Ok(root)
}

/// `decode` 的别名
pub fn parse_str(input: &str) -> Result<Map> {
    decode(input)
}
