//! Política de SLA — prazo por tarefa, indicador de violação e penalidade

use serde::{Deserialize, Serialize};

/// Configuração da política de SLA
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlaConfig {
    /// Prazo rígido: violação soma `1 + atraso`; suave: apenas o atraso
    pub hard_deadline: bool,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            hard_deadline: true,
        }
    }
}

/// Indicador binário de violação — estrito: igualdade NÃO viola
pub fn violation_indicator(latency_s: f64, deadline_s: f64) -> u8 {
    if latency_s > deadline_s { 1 } else { 0 }
}

/// Penalidade de SLA
///
/// Zero quando o prazo é cumprido. Sob prazo rígido, `1 + atraso`;
/// sob prazo suave, apenas o atraso.
pub fn sla_penalty(latency_s: f64, deadline_s: f64, hard_deadline: bool) -> f64 {
    if latency_s <= deadline_s {
        return 0.0;
    }
    let tardiness = latency_s - deadline_s;
    if hard_deadline {
        1.0 + tardiness
    } else {
        tardiness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_strict_inequality() {
        assert_eq!(violation_indicator(1.0, 1.0), 0);
        assert_eq!(violation_indicator(1.0 + 1e-9, 1.0), 1);
        assert_eq!(violation_indicator(0.5, 1.0), 0);
    }

    #[test]
    fn test_penalty_zero_when_met() {
        assert_eq!(sla_penalty(0.9, 1.0, true), 0.0);
        assert_eq!(sla_penalty(1.0, 1.0, true), 0.0);
    }

    #[test]
    fn test_penalty_hard_vs_soft() {
        assert!((sla_penalty(1.5, 1.0, true) - 1.5).abs() < 1e-12);
        assert!((sla_penalty(1.5, 1.0, false) - 0.5).abs() < 1e-12);
    }
}
