/// 把原始 key 拆成路径段
///
/// ```text
/// f            => ["f"]
/// f[a][b]      => ["f", "a", "b"]
/// f[]          => ["f", ""]
/// f[a]x[b]     => ["f", "a"]      // `]` 后不是 `[`，停止
/// a .[[b       => ["a___[b"]      // 无闭合括号，整体作为首段并清洗
/// ```
///
/// 去掉前导空格后为空、或以 `[` 开头的 key 返回 `None`，调用方应跳过该键值对。
pub fn segment(raw_key: &str) -> Option<Vec<String>> {
    let key = raw_key.trim_start_matches(' ');
    if key.is_empty() || key.starts_with('[') {
        return None;
    }

    let mut segments = split_brackets(key);
    segments[0] = sanitize_first(&segments[0]);
    Some(segments)
}

/// 只识别从第一个 `[` 开始的一条连续括号链
fn split_brackets(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in key.char_indices() {
        match c {
            '[' if open.is_none() => {
                open = Some(i);
            }
            ']' => {
                let Some(left) = open.take() else {
                    continue;
                };
                if segments.is_empty() {
                    segments.push(key[..left].to_string());
                }
                segments.push(key[left + 1..i].to_string());

                let rest = &key[i + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    break;
                }
            }
            _ => {}
        }
    }

    if segments.is_empty() {
        segments.push(key.to_string());
    }
    segments
}

/// 首段中的 ` ` `.` `[` 替换为 `_`，遇到 `[` 后其余部分原样保留
fn sanitize_first(first: &str) -> String {
    let mut out = String::with_capacity(first.len());
    for (i, c) in first.char_indices() {
        match c {
            ' ' | '.' => out.push('_'),
            '[' => {
                out.push('_');
                out.push_str(&first[i + 1..]);
                break;
            }
            c => out.push(c),
        }
    }
    out
}
