//! # 📈 triad-workload — Geração Estocástica de Chegadas
//!
//! Produz fluxos ordenados de `(instante_de_chegada, Task)` com processos
//! Poisson homogêneo ou bursty ON/OFF, totalmente determinísticos sob uma
//! semente configurada. O consumidor processa uma chegada por vez; o núcleo
//! não impõe nenhuma distribuição em particular.

pub mod error;
pub mod generators;

// Re-exports
pub use error::{WorkloadError, WorkloadResult};
pub use generators::{WorkloadConfig, WorkloadGenerator, WorkloadMode};
