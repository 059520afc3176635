//! Tree construction from a token stream.

/// Stack-based tree builder.
pub mod builder;

pub use builder::{TreeBuilder, VOID_TAGS, attributes_from_fragments, is_void_tag};
