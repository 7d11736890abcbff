use std::str::FromStr;

use indexmap::IndexMap;
use url::Url;

use crate::error::{ QsError, Result };

/// URL 组成部分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlComponent {
    Scheme,
    Host,
    Port,
    User,
    Pass,
    Path,
    Query,
    Fragment,
}

impl UrlComponent {
    pub const ALL: [UrlComponent; 8] = [
        UrlComponent::Scheme,
        UrlComponent::Host,
        UrlComponent::Port,
        UrlComponent::User,
        UrlComponent::Pass,
        UrlComponent::Path,
        UrlComponent::Query,
        UrlComponent::Fragment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlComponent::Scheme => "scheme",
            UrlComponent::Host => "host",
            UrlComponent::Port => "port",
            UrlComponent::User => "user",
            UrlComponent::Pass => "pass",
            UrlComponent::Path => "path",
            UrlComponent::Query => "query",
            UrlComponent::Fragment => "fragment",
        }
    }
}

impl FromStr for UrlComponent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        UrlComponent::ALL.into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown url component: {}", s))
    }
}

/// 解析后的 URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    /// 取单个组成部分，不存在时返回 None
    pub fn component(&self, component: UrlComponent) -> Option<&str> {
        match component {
            UrlComponent::Scheme => self.scheme.as_deref(),
            UrlComponent::Host => self.host.as_deref(),
            UrlComponent::Port => self.port.as_deref(),
            UrlComponent::User => self.user.as_deref(),
            UrlComponent::Pass => self.pass.as_deref(),
            UrlComponent::Path => Some(self.path.as_str()).filter(|p| !p.is_empty()),
            UrlComponent::Query => self.query.as_deref(),
            UrlComponent::Fragment => self.fragment.as_deref(),
        }
    }

    /// 只包含存在的部分，顺序固定
    pub fn to_map(&self) -> IndexMap<String, String> {
        UrlComponent::ALL.into_iter()
            .filter_map(|c| self.component(c).map(|v| (c.as_str().to_string(), v.to_string())))
            .collect()
    }
}

/// 解析绝对 URL
///
/// 默认端口（如 http 的 80）不会出现在 `port` 中。
pub fn parse_url(input: &str) -> Result<UrlParts> {
    let url = Url::parse(input).map_err(|e| QsError::InvalidUrl(format!("{}: {}", input, e)))?;

    Ok(UrlParts {
        scheme: Some(url.scheme().to_string()),
        host: url.host_str().map(str::to_string),
        port: url.port().map(|p| p.to_string()),
        user: Some(url.username()).filter(|u| !u.is_empty()).map(str::to_string),
        pass: url.password().map(str::to_string),
        path: url.path().to_string(),
        query: url.query().map(str::to_string),
        fragment: url.fragment().map(str::to_string),
    })
}
