//! Motor de simulação edge/cloud — resultado real de executar uma tarefa

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::CoreResult;
use crate::network::{NetworkModel, transfer_time_s};
use crate::node::NodeKind;
use crate::resources::ResourcePool;
use crate::sla::{SlaConfig, sla_penalty, violation_indicator};
use crate::task::Task;

/// Visão somente leitura de um nó no instante da observação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Identidade do nó
    pub node_id: String,
    /// Classe do nó
    pub kind: NodeKind,
    /// Taxa de processamento (MI/s)
    pub f_mi_s: f64,
    /// Capacidade por passo (MI)
    pub capacity_mi_step: f64,
    /// Trabalho enfileirado (MI)
    pub queue_work_mi: f64,
    /// Utilização em [0, 1]
    pub util: f64,
    /// Orçamento de energia por passo; `None` = sem restrição
    pub energy_budget_j_step: Option<f64>,
    /// Banda do enlace iot → nó (Mbps)
    pub bandwidth_mbps: f64,
    /// RTT do enlace (ms)
    pub rtt_ms: f64,
    /// Perda do enlace
    pub loss: f64,
}

/// Snapshot completo do estado observável
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Nós em ordem estável de identidade
    pub nodes: Vec<NodeSnapshot>,
}

/// Resultado de comprometer uma tarefa em um nó — imutável
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Nó escolhido
    pub node_id: String,
    /// Latência realizada (s)
    pub latency_s: f64,
    /// Energia realizada (J)
    pub energy_j: f64,
    /// Indicador binário de violação de SLA
    pub violation: u8,
    /// Magnitude da penalidade de SLA
    pub sla_penalty: f64,
    /// Componente de execução da latência (s)
    pub t_exec_s: f64,
    /// Componente de fila da latência (s)
    pub t_queue_s: f64,
    /// Componente de comunicação da latência (s)
    pub t_comm_s: f64,
}

/// Motor de simulação: estado verdadeiro de fila/utilização e física
/// de execução, transmissão e energia
#[derive(Debug, Clone)]
pub struct EdgeCloudEnv {
    resources: ResourcePool,
    network: NetworkModel,
    sla: SlaConfig,
    dt_s: f64,
}

impl EdgeCloudEnv {
    /// Cria o ambiente com tick de simulação fixo `dt_s`
    pub fn new(resources: ResourcePool, network: NetworkModel, sla: SlaConfig, dt_s: f64) -> Self {
        Self {
            resources,
            network,
            sla,
            dt_s,
        }
    }

    /// Acesso ao pool de recursos
    pub fn resources(&self) -> &ResourcePool {
        &self.resources
    }

    /// Acesso ao modelo de rede
    pub fn network(&self) -> &NetworkModel {
        &self.network
    }

    /// Reinicia o estado de execução e devolve a observação inicial
    pub fn reset(&mut self) -> CoreResult<StateSnapshot> {
        self.resources.reset_runtime();
        self.observe_state()
    }

    /// Observação somente leitura: atributos estáticos, runtime e o enlace
    /// da fonte externa fixa (`"iot"`) até cada nó
    pub fn observe_state(&self) -> CoreResult<StateSnapshot> {
        let mut nodes = Vec::with_capacity(self.resources.len());
        for nid in self.resources.all_ids() {
            let node = self.resources.get(&nid)?;
            let rt = self.resources.get_runtime(&nid)?;
            let link = self.network.get_link(constants::IOT_SOURCE, &nid)?;
            nodes.push(NodeSnapshot {
                node_id: nid.clone(),
                kind: node.kind,
                f_mi_s: node.f_mi_s,
                capacity_mi_step: node.capacity_mi_step,
                queue_work_mi: rt.queue_work_mi,
                util: rt.util,
                energy_budget_j_step: node.energy_budget_j_step,
                bandwidth_mbps: link.bandwidth_mbps,
                rtt_ms: link.rtt_ms,
                loss: link.loss,
            });
        }
        Ok(StateSnapshot { nodes })
    }

    fn t_exec(&self, task: &Task, node_id: &str) -> CoreResult<f64> {
        let f = self.resources.get(node_id)?.f_mi_s.max(constants::EPS_RATE);
        Ok(task.c_mi / f)
    }

    fn t_queue(&self, node_id: &str) -> CoreResult<f64> {
        let rt = self.resources.get_runtime(node_id)?;
        let f = self.resources.get(node_id)?.f_mi_s.max(constants::EPS_RATE);
        Ok(rt.queue_work_mi.max(0.0) / f)
    }

    fn t_comm(&self, task: &Task, node_id: &str) -> CoreResult<f64> {
        let link = self.network.get_link(constants::IOT_SOURCE, node_id)?;
        Ok(transfer_time_s(
            task.s_mb,
            link.bandwidth_mbps,
            link.rtt_ms,
            link.loss,
            link.overhead_ms,
        ))
    }

    fn energy(&self, node_id: &str, t_exec: f64, t_comm: f64) -> CoreResult<f64> {
        let node = self.resources.get(node_id)?;
        let rt = self.resources.get_runtime(node_id)?;
        // Utilização PRÉ-atualização: a energia reflete o estado no momento
        // da decisão, antes do incremento de fila
        let p_w = node.power_idle_w + rt.util * node.power_dyn_w;
        Ok(p_w * t_exec + constants::NIC_POWER_W * t_comm)
    }

    /// Compromete a tarefa no nó escolhido e evolui o estado
    ///
    /// Calcula latência (execução + fila + comunicação), violação e
    /// penalidade de SLA e energia; depois incrementa a fila do nó com a
    /// demanda da tarefa e aplica um tick global de decaimento. O decaimento
    /// avança exatamente um tick por tarefa comprometida, independente do
    /// intervalo real entre chegadas.
    pub fn step(&mut self, task: &Task, node_id: &str) -> CoreResult<(StateSnapshot, StepResult)> {
        let t_exec = self.t_exec(task, node_id)?;
        let t_queue = self.t_queue(node_id)?;
        let t_comm = self.t_comm(task, node_id)?;
        let latency = t_exec + t_queue + t_comm;

        let violation = violation_indicator(latency, task.d_s);
        let penalty = sla_penalty(latency, task.d_s, self.sla.hard_deadline);
        let energy = self.energy(node_id, t_exec, t_comm)?;

        let rt = self.resources.get_runtime_mut(node_id)?;
        rt.queue_work_mi += task.c_mi;
        self.resources.step_decay(self.dt_s);

        let result = StepResult {
            node_id: node_id.to_string(),
            latency_s: latency,
            energy_j: energy,
            violation,
            sla_penalty: penalty,
            t_exec_s: t_exec,
            t_queue_s: t_queue,
            t_comm_s: t_comm,
        };
        Ok((self.observe_state()?, result))
    }
}
