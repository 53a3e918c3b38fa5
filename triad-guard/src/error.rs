//! Tipos de erro para triad-guard

use thiserror::Error;

/// Resultado customizado para operações do guardião
pub type GuardResult<T> = Result<T, GuardError>;

/// Erros de seleção e configuração do guardião
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuardError {
    /// Repair chamado com conjunto viável vazio
    #[error("repair_action called with empty feasible set")]
    EmptyFeasibleSet,

    /// Fallback chamado sem nenhum candidato
    #[error("No nodes available for fallback_action")]
    NoCandidates,

    /// Nó proposto fora do conjunto de candidatos corrente
    #[error("Proposed node not among candidates: {0}")]
    UnknownNode(String),

    /// Modo de fallback desconhecido
    #[error("Unknown fallback mode: {0}")]
    UnknownMode(String),
}
