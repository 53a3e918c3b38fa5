//! Tipos de erro para triad-predict

use thiserror::Error;

/// Resultado customizado para operações de predição
pub type PredictResult<T> = Result<T, PredictError>;

/// Erros de vetorização e configuração de agregação
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictError {
    /// Dimensão do vetor kappa não confere com a configurada
    #[error("kappa dimension mismatch: expected {expected}, got {got}")]
    KappaDimMismatch { expected: usize, got: usize },

    /// Nó esperado pelo vetorizador ausente do snapshot
    #[error("Node not found in snapshot: {0}")]
    NodeNotFound(String),

    /// Modo de agregação desconhecido
    #[error("Unknown aggregation mode: {0}")]
    UnknownMode(String),
}
