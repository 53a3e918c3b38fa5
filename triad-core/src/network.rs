//! Modelo de rede — enlaces direcionados com banda, RTT, perda e overhead

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{CoreError, CoreResult};

/// Enlace direcionado — imutável depois de registrado
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Link {
    /// Banda (Mbps)
    pub bandwidth_mbps: f64,
    /// Tempo de ida e volta (ms)
    pub rtt_ms: f64,
    /// Probabilidade de perda de pacote, em [0, 1)
    pub loss: f64,
    /// Overhead fixo de protocolo (ms)
    pub overhead_ms: f64,
}

impl Link {
    /// Cria enlace com overhead padrão
    pub fn new(bandwidth_mbps: f64, rtt_ms: f64, loss: f64) -> Self {
        Self {
            bandwidth_mbps,
            rtt_ms,
            loss,
            overhead_ms: constants::DEFAULT_OVERHEAD_MS,
        }
    }

    /// Define overhead fixo do enlace
    pub fn with_overhead(mut self, overhead_ms: f64) -> Self {
        self.overhead_ms = overhead_ms;
        self
    }
}

/// Tempo de comunicação de um payload sobre um enlace (segundos)
///
/// Transmissão + meia viagem de RTT + overhead fixo, tudo inflado pelo fator
/// `1/(1 - loss)` que modela retransmissões sob perda sem simulá-las
/// explicitamente. A perda é saturada em [`constants::MAX_LOSS`].
pub fn transfer_time_s(
    s_mb: f64,
    bandwidth_mbps: f64,
    rtt_ms: f64,
    loss: f64,
    overhead_ms: f64,
) -> f64 {
    let mbps = bandwidth_mbps.max(constants::EPS_BANDWIDTH);
    let rate_mb_s = mbps / 8.0;
    let tx_s = s_mb.max(0.0) / rate_mb_s;
    let one_way_s = (rtt_ms.max(0.0) / 1000.0) / 2.0;
    let overhead_s = overhead_ms.max(0.0) / 1000.0;
    let loss = loss.clamp(0.0, constants::MAX_LOSS);
    let inflation = 1.0 / (1.0 - loss);
    inflation * (tx_s + one_way_s + overhead_s)
}

/// Mapa de enlaces direcionados, chaveado por (origem, destino)
#[derive(Debug, Clone, Default)]
pub struct NetworkModel {
    links: BTreeMap<(String, String), Link>,
}

impl NetworkModel {
    /// Cria modelo de rede vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra (ou substitui) o enlace do par direcionado
    pub fn set_link(&mut self, src: impl Into<String>, dst: impl Into<String>, link: Link) {
        self.links.insert((src.into(), dst.into()), link);
    }

    /// Retorna o enlace do par; falha se não registrado (sem default implícito)
    pub fn get_link(&self, src: &str, dst: &str) -> CoreResult<&Link> {
        self.links
            .get(&(src.to_string(), dst.to_string()))
            .ok_or_else(|| CoreError::LinkNotFound {
                src: src.to_string(),
                dst: dst.to_string(),
            })
    }
}
