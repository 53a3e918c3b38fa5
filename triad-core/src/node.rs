//! Nós de computação (edge e cloud) e seu estado de execução

use serde::{Deserialize, Serialize};

use crate::constants;

/// Classe do nó de computação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Nó de borda (próximo à fonte, menor potência)
    Edge,
    /// Nó de nuvem (distante, maior capacidade e potência)
    Cloud,
}

impl NodeKind {
    /// Indicador binário usado nas features de candidato
    pub fn is_cloud(&self) -> bool {
        matches!(self, NodeKind::Cloud)
    }
}

/// Nó de computação — imutável após criação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Identidade única
    pub id: String,
    /// Classe (edge ou cloud)
    pub kind: NodeKind,
    /// Taxa de processamento (MI/s)
    pub f_mi_s: f64,
    /// Capacidade por passo de simulação (MI)
    pub capacity_mi_step: f64,
    /// Potência em idle (Watts)
    pub power_idle_w: f64,
    /// Potência dinâmica máxima (Watts)
    pub power_dyn_w: f64,
    /// Orçamento de energia por passo (Joules); `None` = sem restrição
    pub energy_budget_j_step: Option<f64>,
}

impl Node {
    /// Cria nó sem orçamento de energia
    pub fn new(
        id: impl Into<String>,
        kind: NodeKind,
        f_mi_s: f64,
        capacity_mi_step: f64,
        power_idle_w: f64,
        power_dyn_w: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            f_mi_s,
            capacity_mi_step,
            power_idle_w,
            power_dyn_w,
            energy_budget_j_step: None,
        }
    }

    /// Define orçamento de energia por passo
    pub fn with_energy_budget(mut self, budget_j_step: f64) -> Self {
        self.energy_budget_j_step = Some(budget_j_step);
        self
    }
}

/// Estado mutável de execução de um nó
///
/// Propriedade exclusiva do `ResourcePool`; alterado apenas pelo decaimento
/// de fila (`step_decay`) e pelo incremento de fila do motor de simulação.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NodeRuntime {
    /// Trabalho enfileirado pendente (MI)
    pub queue_work_mi: f64,
    /// Utilização derivada, em [0, 1]
    pub util: f64,
}

impl NodeRuntime {
    /// Recalcula a utilização a partir da fila e da capacidade do nó
    pub fn refresh_util(&mut self, capacity_mi_step: f64) {
        let cap = capacity_mi_step.max(constants::EPS_CAPACITY);
        self.util = (self.queue_work_mi / cap).min(1.0);
    }
}
