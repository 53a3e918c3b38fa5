//! Tipos de erro para triad-core

use thiserror::Error;

/// Resultado customizado para operações do núcleo
pub type CoreResult<T> = Result<T, CoreError>;

/// Erros do modelo físico e do motor de simulação
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Nó desconhecido
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Nó já registrado no pool
    #[error("Node already registered: {0}")]
    DuplicateNode(String),

    /// Enlace desconhecido para o par (origem, destino)
    #[error("Link not found: {src} -> {dst}")]
    LinkNotFound { src: String, dst: String },
}
