//! Agregador de predições — compressão determinística em vetor de tamanho fixo

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PredictionMap;
use crate::error::{PredictError, PredictResult};

/// Modo de agregação — variante fechada, rejeitada na construção
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Os k candidatos de menor score, em ordem de score
    TopK,
}

impl FromStr for AggregationMode {
    type Err = PredictError;

    fn from_str(s: &str) -> PredictResult<Self> {
        match s {
            "topk" => Ok(AggregationMode::TopK),
            other => Err(PredictError::UnknownMode(other.to_string())),
        }
    }
}

/// Configuração do agregador
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Modo de compressão
    pub mode: AggregationMode,
    /// Número de candidatos retidos (efetivo ≥ 1)
    pub k: usize,
    /// Anexa o total de candidatos como escalar final
    pub include_counts: bool,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::TopK,
            k: 3,
            include_counts: true,
        }
    }
}

/// Comprime os mapas L/E/R em um vetor fixo para consumidores externos
/// (por exemplo, uma política aprendida), sem comprometer nenhum nó
///
/// Entradas idênticas produzem sempre a mesma saída; o comprimento é `3k`
/// (ou `3k+1` com contagem) independentemente do tamanho do conjunto de
/// candidatos.
#[derive(Debug, Clone, Copy)]
pub struct PredictionAggregator {
    cfg: AggregationConfig,
}

impl PredictionAggregator {
    /// Cria agregador
    pub fn new(cfg: AggregationConfig) -> Self {
        Self { cfg }
    }

    /// Configuração ativa
    pub fn config(&self) -> &AggregationConfig {
        &self.cfg
    }

    /// Comprimento fixo do vetor de saída
    pub fn output_dim(&self) -> usize {
        let k = self.cfg.k.max(1);
        3 * k + usize::from(self.cfg.include_counts)
    }

    /// Agrega os mapas de predição com os pesos de score (α, β, γ)
    pub fn aggregate(
        &self,
        latency: &PredictionMap,
        energy: &PredictionMap,
        risk: &PredictionMap,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Vec<f64> {
        match self.cfg.mode {
            AggregationMode::TopK => self.aggregate_topk(latency, energy, risk, alpha, beta, gamma),
        }
    }

    fn aggregate_topk(
        &self,
        latency: &PredictionMap,
        energy: &PredictionMap,
        risk: &PredictionMap,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Vec<f64> {
        let mut items: Vec<(&String, f64)> = latency
            .keys()
            .map(|nid| {
                let l = latency.get(nid).copied().unwrap_or(f64::INFINITY);
                let e = energy.get(nid).copied().unwrap_or(f64::INFINITY);
                let r = risk.get(nid).copied().unwrap_or(1.0);
                (nid, alpha * r + beta * l + gamma * e)
            })
            .collect();
        // Ordenação estável: empates mantêm a ordem do domínio de iteração
        items.sort_by(|a, b| a.1.total_cmp(&b.1));

        let k = self.cfg.k.max(1);
        let mut vec = Vec::with_capacity(self.output_dim());
        for (nid, _) in items.iter().take(k) {
            vec.push(latency.get(*nid).copied().unwrap_or(f64::INFINITY));
            vec.push(energy.get(*nid).copied().unwrap_or(f64::INFINITY));
            vec.push(risk.get(*nid).copied().unwrap_or(1.0));
        }
        while vec.len() < 3 * k {
            vec.extend_from_slice(&[0.0, 0.0, 0.0]);
        }
        if self.cfg.include_counts {
            vec.push(latency.len() as f64);
        }
        vec
    }
}
