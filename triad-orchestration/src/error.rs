//! Tipos de erro para triad-orchestration

use thiserror::Error;
use triad_core::error::CoreError;
use triad_guard::error::GuardError;
use triad_predict::error::PredictError;

/// Resultado customizado para orquestração
pub type OrchestrationResult<T> = Result<T, OrchestrationError>;

/// Erros do laço de dispatch
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrchestrationError {
    /// Erro do modelo físico ou do motor de simulação
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Erro de predição ou vetorização
    #[error("Predict error: {0}")]
    Predict(#[from] PredictError),

    /// Erro do guardião de viabilidade
    #[error("Guard error: {0}")]
    Guard(#[from] GuardError),

    /// Política consultada sem nenhum candidato disponível
    #[error("No candidates available for policy")]
    EmptyCandidateSet,

    /// Falha interna de uma política externa
    #[error("Policy failed: {0}")]
    Policy(String),
}
