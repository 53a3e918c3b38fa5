//! Tipos de erro para triad-workload

use thiserror::Error;

/// Resultado customizado para geração de workload
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Erros de configuração do gerador
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkloadError {
    /// Modo de workload desconhecido
    #[error("Unknown workload mode: {0}")]
    UnknownMode(String),
}
