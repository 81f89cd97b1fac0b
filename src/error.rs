use thiserror::Error;

use crate::entity;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    #[error("vector has zero length")]
    ZeroLength,

    #[error("matrix is singular")]
    Singular,

    #[error("transform hierarchy above entity {entity} exceeds depth {limit}")]
    HierarchyTooDeep {
        entity: entity::Handle,
        limit: usize,
    },

    #[error("entity {0} has no transform")]
    MissingEntity(entity::Handle),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] ini::Error),

    #[error("malformed settings: {0}")]
    Syntax(#[from] ini::ParseError),

    #[error("invalid value \"{value}\" for {key} in section [{section}]")]
    Value {
        section: String,
        key: String,
        value: String,
    },
}
