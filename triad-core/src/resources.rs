//! Pool de recursos — registro de nós e estado de execução por episódio

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::node::{Node, NodeRuntime};

/// Registro de nós com estado de execução exclusivo do episódio
#[derive(Debug, Clone, Default)]
pub struct ResourcePool {
    nodes: BTreeMap<String, Node>,
    runtime: BTreeMap<String, NodeRuntime>,
}

impl ResourcePool {
    /// Cria pool vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra um nó com fila e utilização zeradas
    pub fn add_node(&mut self, node: Node) -> CoreResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(CoreError::DuplicateNode(node.id.clone()));
        }
        self.runtime.insert(node.id.clone(), NodeRuntime::default());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Identidades de todos os nós registrados (ordem estável)
    pub fn all_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    /// Número de nós registrados
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Verifica se o pool está vazio
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Atributos estáticos de um nó
    pub fn get(&self, node_id: &str) -> CoreResult<&Node> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| CoreError::NodeNotFound(node_id.to_string()))
    }

    /// Estado de execução de um nó
    pub fn get_runtime(&self, node_id: &str) -> CoreResult<&NodeRuntime> {
        self.runtime
            .get(node_id)
            .ok_or_else(|| CoreError::NodeNotFound(node_id.to_string()))
    }

    /// Estado de execução mutável de um nó
    pub fn get_runtime_mut(&mut self, node_id: &str) -> CoreResult<&mut NodeRuntime> {
        self.runtime
            .get_mut(node_id)
            .ok_or_else(|| CoreError::NodeNotFound(node_id.to_string()))
    }

    /// Reinicializa todos os estados de execução — chamado no início do episódio
    pub fn reset_runtime(&mut self) {
        for rt in self.runtime.values_mut() {
            *rt = NodeRuntime::default();
        }
    }

    /// Avança o tempo em `dt_s` segundos
    ///
    /// Cada nó processa `max(0, f) * max(0, dt)` MI da fila (saturada em
    /// zero) e a utilização é recalculada. Único mutador do runtime além do
    /// incremento de fila do motor de simulação.
    pub fn step_decay(&mut self, dt_s: f64) {
        for (nid, node) in &self.nodes {
            if let Some(rt) = self.runtime.get_mut(nid) {
                let processed = node.f_mi_s.max(0.0) * dt_s.max(0.0);
                rt.queue_work_mi = (rt.queue_work_mi - processed).max(0.0);
                rt.refresh_util(node.capacity_mi_step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn edge(id: &str) -> Node {
        Node::new(id, NodeKind::Edge, 500.0, 1000.0, 4.0, 10.0)
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut pool = ResourcePool::new();
        pool.add_node(edge("edge1")).unwrap();
        let err = pool.add_node(edge("edge1")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateNode("edge1".into()));
    }

    #[test]
    fn test_get_unknown_fails() {
        let pool = ResourcePool::new();
        assert!(matches!(pool.get("nope"), Err(CoreError::NodeNotFound(_))));
        assert!(matches!(
            pool.get_runtime("nope"),
            Err(CoreError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_step_decay_clamps_at_zero() {
        let mut pool = ResourcePool::new();
        pool.add_node(edge("edge1")).unwrap();
        pool.get_runtime_mut("edge1").unwrap().queue_work_mi = 100.0;

        // 500 MI/s por 1s processa muito mais que os 100 MI enfileirados
        pool.step_decay(1.0);
        let rt = pool.get_runtime("edge1").unwrap();
        assert_eq!(rt.queue_work_mi, 0.0);
        assert_eq!(rt.util, 0.0);
    }

    #[test]
    fn test_step_decay_util_in_unit_interval() {
        let mut pool = ResourcePool::new();
        pool.add_node(edge("edge1")).unwrap();
        pool.get_runtime_mut("edge1").unwrap().queue_work_mi = 10_000.0;

        for _ in 0..50 {
            pool.step_decay(0.1);
            let rt = pool.get_runtime("edge1").unwrap();
            assert!(rt.queue_work_mi >= 0.0);
            assert!((0.0..=1.0).contains(&rt.util));
        }
    }

    #[test]
    fn test_reset_runtime() {
        let mut pool = ResourcePool::new();
        pool.add_node(edge("edge1")).unwrap();
        pool.get_runtime_mut("edge1").unwrap().queue_work_mi = 42.0;

        pool.reset_runtime();
        assert_eq!(pool.get_runtime("edge1").unwrap().queue_work_mi, 0.0);
    }
}
