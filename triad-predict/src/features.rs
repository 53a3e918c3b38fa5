//! Construção de features de candidato — snapshot somente leitura por nó

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use triad_core::prelude::*;

/// Atributos da tarefa, achatados para predição
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaskFeatures {
    /// Demanda de computação (MI)
    pub c_mi: f64,
    /// Prazo (s)
    pub d_s: f64,
    /// Payload (MB)
    pub s_mb: f64,
    /// Prioridade
    pub p: f64,
}

/// Atributos do nó candidato
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeFeatures {
    /// Taxa de processamento (MI/s)
    pub f_mi_s: f64,
    /// Capacidade por passo (MI)
    pub capacity_mi_step: f64,
    /// Trabalho enfileirado (MI)
    pub queue_work_mi: f64,
    /// Utilização em [0, 1]
    pub util: f64,
    /// Orçamento de energia achatado; `-1.0` sinaliza ausência
    pub energy_budget_j_step: f64,
    /// Indicador binário cloud (1.0) / edge (0.0)
    pub kind_is_cloud: f64,
}

impl NodeFeatures {
    /// Reconstitui o orçamento de energia a partir do sentinela achatado
    ///
    /// Valores negativos voltam a significar "sem restrição" assim que
    /// cruzam de volta para código estruturado.
    pub fn energy_budget(&self) -> Option<f64> {
        if self.energy_budget_j_step < 0.0 {
            None
        } else {
            Some(self.energy_budget_j_step)
        }
    }

    /// Indicador de nó cloud
    pub fn is_cloud(&self) -> bool {
        self.kind_is_cloud >= 0.5
    }
}

/// Atributos do enlace iot → nó
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkFeatures {
    /// Banda (Mbps)
    pub bandwidth_mbps: f64,
    /// RTT (ms)
    pub rtt_ms: f64,
    /// Probabilidade de perda
    pub loss: f64,
}

/// Pacote de features de um candidato — construído fresco a cada decisão,
/// nunca mutado; compartilhado por todos os preditores para que as saídas
/// L/E/R sejam mutuamente consistentes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CandidateFeatures {
    /// Features da tarefa
    pub task: TaskFeatures,
    /// Features do nó
    pub node: NodeFeatures,
    /// Features do enlace
    pub link: LinkFeatures,
}

/// Construtor de candidatos — função pura de (snapshot, tarefa) para o
/// mapa nó → features, sem estado oculto
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Cria construtor
    pub fn new() -> Self {
        Self
    }

    /// Constrói o mapa de candidatos para uma decisão
    pub fn build_candidates(
        &self,
        state: &StateSnapshot,
        task: &Task,
    ) -> BTreeMap<String, CandidateFeatures> {
        let phi = TaskFeatures {
            c_mi: task.c_mi,
            d_s: task.d_s,
            s_mb: task.s_mb,
            p: task.p as f64,
        };
        let mut feats = BTreeMap::new();
        for n in &state.nodes {
            let psi = NodeFeatures {
                f_mi_s: n.f_mi_s,
                capacity_mi_step: n.capacity_mi_step,
                queue_work_mi: n.queue_work_mi,
                util: n.util,
                energy_budget_j_step: n.energy_budget_j_step.unwrap_or(-1.0),
                kind_is_cloud: if n.kind.is_cloud() { 1.0 } else { 0.0 },
            };
            let link = LinkFeatures {
                bandwidth_mbps: n.bandwidth_mbps,
                rtt_ms: n.rtt_ms,
                loss: n.loss,
            };
            feats.insert(
                n.node_id.clone(),
                CandidateFeatures {
                    task: phi,
                    node: psi,
                    link,
                },
            );
        }
        feats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triad_core::node::NodeKind;

    fn snapshot() -> StateSnapshot {
        StateSnapshot {
            nodes: vec![
                NodeSnapshot {
                    node_id: "cloud1".into(),
                    kind: NodeKind::Cloud,
                    f_mi_s: 2500.0,
                    capacity_mi_step: 6000.0,
                    queue_work_mi: 0.0,
                    util: 0.0,
                    energy_budget_j_step: None,
                    bandwidth_mbps: 30.0,
                    rtt_ms: 60.0,
                    loss: 0.01,
                },
                NodeSnapshot {
                    node_id: "edge1".into(),
                    kind: NodeKind::Edge,
                    f_mi_s: 800.0,
                    capacity_mi_step: 1200.0,
                    queue_work_mi: 100.0,
                    util: 0.08,
                    energy_budget_j_step: Some(40.0),
                    bandwidth_mbps: 80.0,
                    rtt_ms: 12.0,
                    loss: 0.01,
                },
            ],
        }
    }

    #[test]
    fn test_budget_sentinel_roundtrip() {
        let task = Task::new("t1", 100.0, 1.0, 1.0, 0);
        let feats = FeatureBuilder::new().build_candidates(&snapshot(), &task);

        let cloud = &feats["cloud1"].node;
        assert_eq!(cloud.energy_budget_j_step, -1.0);
        assert_eq!(cloud.energy_budget(), None);

        let edge = &feats["edge1"].node;
        assert_eq!(edge.energy_budget(), Some(40.0));
    }

    #[test]
    fn test_cloud_indicator() {
        let task = Task::new("t1", 100.0, 1.0, 1.0, 2);
        let feats = FeatureBuilder::new().build_candidates(&snapshot(), &task);
        assert!(feats["cloud1"].node.is_cloud());
        assert!(!feats["edge1"].node.is_cloud());
        assert_eq!(feats["edge1"].task.p, 2.0);
    }

    #[test]
    fn test_domain_matches_snapshot() {
        let task = Task::new("t1", 100.0, 1.0, 1.0, 0);
        let feats = FeatureBuilder::new().build_candidates(&snapshot(), &task);
        let ids: Vec<_> = feats.keys().cloned().collect();
        assert_eq!(ids, vec!["cloud1".to_string(), "edge1".to_string()]);
    }
}
