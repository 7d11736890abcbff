use base64::{ Engine, engine::general_purpose::STANDARD };
use percent_encoding::{ AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode };

use crate::error::{ QsError, Result };

/// RFC 3986 非保留字符：字母数字和 `-_.~`
const RAW_URL_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// 所有 `%` 后面必须紧跟两个十六进制字符
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return false;
            }
            if !bytes[i + 1].is_ascii_hexdigit() || !bytes[i + 2].is_ascii_hexdigit() {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// 严格解码一个组件，非法转义返回 None
///
/// `plus_as_space` 为 true 时按表单规则把 `+` 当作空格。
/// 解码后不是合法 UTF-8 的字节用 U+FFFD 替换。
pub(crate) fn decode_component(s: &str, plus_as_space: bool) -> Option<String> {
    if !has_valid_escapes(s) {
        return None;
    }

    let decoded = if plus_as_space && s.contains('+') {
        let replaced = s.replace('+', " ");
        percent_decode(replaced.as_bytes()).decode_utf8_lossy().into_owned()
    } else {
        percent_decode(s.as_bytes()).decode_utf8_lossy().into_owned()
    };
    Some(decoded)
}

fn malformed(s: &str) -> QsError {
    QsError::InvalidEscape(s.to_string())
}

/// 表单编码：空格 => `+`，其余保留字符 => `%XX`
pub fn url_encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// 表单解码：`+` => 空格，`%XX` => 字节
pub fn url_decode(s: &str) -> Result<String> {
    decode_component(s, true).ok_or_else(|| malformed(s))
}

/// RFC 3986 编码，空格编码为 `%20`
pub fn raw_url_encode(s: &str) -> String {
    utf8_percent_encode(s, RAW_URL_SET).to_string()
}

/// RFC 3986 解码，`+` 保持原样
pub fn raw_url_decode(s: &str) -> Result<String> {
    decode_component(s, false).ok_or_else(|| malformed(s))
}

pub fn base64_encode(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}

pub fn base64_decode(s: &str) -> Result<String> {
    let bytes = STANDARD.decode(s).map_err(|e| QsError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| QsError::InvalidBase64(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_escapes() {
        assert!(has_valid_escapes("abc"));
        assert!(has_valid_escapes("%41%4a"));
        assert!(!has_valid_escapes("%"));
        assert!(!has_valid_escapes("%4"));
        assert!(!has_valid_escapes("a%zz"));
    }

    #[test]
    fn test_plus_is_decoded_before_escapes() {
        assert_eq!(decode_component("a+b%2Bc", true).unwrap(), "a b+c");
        assert_eq!(decode_component("a+b%2Bc", false).unwrap(), "a+b+c");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(decode_component("%FF", true).unwrap(), "\u{FFFD}");
    }
}
