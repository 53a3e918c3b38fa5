//! # 🛡️ triad-guard — Guardião de Viabilidade, Repair e Fallback
//!
//! Transforma uma decisão candidata em uma decisão garantidamente viável:
//! aceita a proposta quando passa nas restrições duras, repara escolhendo o
//! melhor nó viável quando não passa, e recorre ao fallback configurado
//! quando nenhum nó é viável. Enquanto existir ao menos um candidato, uma
//! decisão é sempre produzida.
//!
//! ## Máquina de decisão (uma decisão por tarefa, sem retry)
//!
//! ```text
//! PROPOSE ──▶ viável? ──sim──▶ ACCEPT
//!                │
//!               não
//!                ▼
//!       conjunto viável ≠ ∅ ? ──sim──▶ REPAIR  (argmin α·R + β·L + γ·E)
//!                │
//!               não
//!                ▼
//!            FALLBACK  (eft | least_energy | weighted, sem filtro)
//! ```

pub mod error;
pub mod fallback;
pub mod feasibility;
pub mod pipeline;
pub mod repair;

// Re-exports
pub use error::{GuardError, GuardResult};
pub use fallback::{FallbackConfig, FallbackMode, fallback_action};
pub use feasibility::{FeasibilityConfig, feasible_set, is_feasible};
pub use pipeline::{DecisionMode, GuardPipeline};
pub use repair::repair_action;
