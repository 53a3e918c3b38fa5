//! Tarefa de offloading — efêmera, vive por uma única decisão

use serde::{Deserialize, Serialize};

/// Tarefa chegando da fonte IoT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Identidade da tarefa
    pub id: String,
    /// Demanda de computação (MI)
    pub c_mi: f64,
    /// Prazo (segundos)
    pub d_s: f64,
    /// Tamanho do payload (MB)
    pub s_mb: f64,
    /// Classe de prioridade (inteira, maior = mais crítica)
    pub p: i32,
}

impl Task {
    /// Cria nova tarefa
    pub fn new(id: impl Into<String>, c_mi: f64, d_s: f64, s_mb: f64, p: i32) -> Self {
        Self {
            id: id.into(),
            c_mi,
            d_s,
            s_mb,
            p,
        }
    }
}
