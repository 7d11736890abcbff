pub mod builder;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod node;
pub mod segment;
pub mod url_parts;

pub use codec::{ base64_decode, base64_encode, raw_url_decode, raw_url_encode, url_decode, url_encode };
pub use decode::{ decode, parse_str };
pub use encode::{ Params, encode, encode_pairs, http_build_query, params_from_tree };
pub use error::{ QsError, Result };
pub use node::{ Map, Node, NodeKind };
pub use url_parts::{ UrlComponent, UrlParts, parse_url };
