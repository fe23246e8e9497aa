use thiserror::Error;

use crate::builder::Supplied;


/// Returned by `Definition::build` when the supplied slots cannot ground the
/// rest: a definition needs `point` plus either `bind` or both `map` and `join`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid monad definition: requires point+(bind or map+join), supplied {supplied}")]
pub struct InvalidDefinition {
    pub supplied: Supplied,
}

pub type Result<T> = std::result::Result<T, InvalidDefinition>;
