use thiserror::Error;

use crate::node::NodeKind;

/// 解码 / 编解码错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QsError {
    /// 第 `pair` 个键值对（从 0 开始）中的 `%XX` 转义非法
    #[error("malformed percent-encoding in pair #{pair}: {input:?}")]
    MalformedPercentEncoding { pair: usize, input: String },

    /// 单独调用 `url_decode` / `raw_url_decode` 时的非法转义，没有键值对序号
    #[error("malformed percent-encoding: {0:?}")]
    InvalidEscape(String),

    /// 同一路径先后被当作不同种类的节点使用
    #[error("type conflict at '{path}': expected {expected}, found {found}")]
    TypeConflict {
        path: String,
        expected: NodeKind,
        found: NodeKind,
    },

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid base64: {0}")]
    InvalidBase64(String),
}

pub type Result<T> = std::result::Result<T, QsError>;
