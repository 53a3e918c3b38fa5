//! # 🛰️ triad-core — Modelo Físico Edge/Cloud e Motor de Simulação
//!
//! Fundamento do ecossistema TRIAD: modela nós de computação (edge e cloud),
//! enlaces de rede com perda e banda variável, e o motor de simulação que
//! calcula o resultado real da execução de uma tarefa (fila, transmissão,
//! energia, violação de SLA).
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       EdgeCloudEnv                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────────┐  │
//! │  │ ResourcePool │  │ NetworkModel │  │     SlaConfig     │  │
//! │  │ (nós + fila) │  │ (enlaces)    │  │ (hard/soft)       │  │
//! │  └──────┬───────┘  └──────┬───────┘  └─────────┬─────────┘  │
//! │         │                 │                    │             │
//! │         ▼                 ▼                    ▼             │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  step(task, node) → latência | energia | violação    │   │
//! │  │  observe_state()  → StateSnapshot (somente leitura)  │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Uso
//!
//! ```ignore
//! use triad_core::prelude::*;
//!
//! let mut pool = ResourcePool::new();
//! pool.add_node(Node::new("edge1", NodeKind::Edge, 500.0, 1000.0, 4.0, 10.0))?;
//!
//! let mut net = NetworkModel::new();
//! net.set_link("iot", "edge1", Link::new(50.0, 10.0, 0.0));
//!
//! let mut env = EdgeCloudEnv::new(pool, net, SlaConfig::default(), 1.0);
//! let (state, result) = env.step(&Task::new("t1", 100.0, 1.0, 1.0, 0), "edge1")?;
//! println!("latência: {:.3}s energia: {:.3}J", result.latency_s, result.energy_j);
//! ```

pub mod env;
pub mod error;
pub mod network;
pub mod node;
pub mod prelude;
pub mod resources;
pub mod sla;
pub mod task;

// Re-exports
pub use env::{EdgeCloudEnv, NodeSnapshot, StateSnapshot, StepResult};
pub use error::{CoreError, CoreResult};
pub use network::{Link, NetworkModel, transfer_time_s};
pub use node::{Node, NodeKind, NodeRuntime};
pub use resources::ResourcePool;
pub use sla::{SlaConfig, sla_penalty, violation_indicator};
pub use task::Task;

/// Constantes físicas e numéricas do modelo de offloading
pub mod constants {
    /// Piso numérico para taxa de processamento (MI/s)
    pub const EPS_RATE: f64 = 1e-9;

    /// Piso numérico para capacidade por passo (MI)
    pub const EPS_CAPACITY: f64 = 1e-6;

    /// Piso numérico para banda (Mbps)
    pub const EPS_BANDWIDTH: f64 = 1e-6;

    /// Teto da probabilidade de perda usado na inflação de retransmissão
    pub const MAX_LOSS: f64 = 0.99;

    /// Potência da interface de rede durante transmissão (Watts)
    pub const NIC_POWER_W: f64 = 1.5;

    /// Overhead fixo padrão de enlace (ms)
    pub const DEFAULT_OVERHEAD_MS: f64 = 1.0;

    /// Identidade fixa da fonte externa de tarefas
    pub const IOT_SOURCE: &str = "iot";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_sane() {
        assert!(constants::EPS_RATE > 0.0);
        assert!(constants::MAX_LOSS < 1.0);
        assert!(constants::NIC_POWER_W > 0.0);
    }
}
