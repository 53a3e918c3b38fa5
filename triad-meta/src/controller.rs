//! Meta-controlador — adaptação limitada dos pesos (α, β, γ)

use serde::{Deserialize, Serialize};

use crate::signals::PerformanceSignals;

/// Vetor de pesos no 3-simplexo: importância relativa de risco (α),
/// latência (β) e energia (γ)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weights {
    /// Peso do risco
    pub alpha: f64,
    /// Peso da latência
    pub beta: f64,
    /// Peso da energia
    pub gamma: f64,
}

impl Weights {
    /// Soma dos componentes
    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma
    }
}

/// Configuração do meta-controlador
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Piso de cada componente antes da renormalização
    pub w_min: f64,
    /// Teto de cada componente antes da renormalização
    pub w_max: f64,
    /// Fator de suavização exponencial; maior ⇒ adaptação mais lenta
    pub ema: f64,
    /// Coeficiente da urgência de SLA
    pub k_sla: f64,
    /// Coeficiente da urgência de latência
    pub k_lat: f64,
    /// Coeficiente da urgência de energia
    pub k_eng: f64,
    /// Peso base de risco
    pub base_alpha: f64,
    /// Peso base de latência
    pub base_beta: f64,
    /// Peso base de energia
    pub base_gamma: f64,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            w_min: 0.10,
            w_max: 0.80,
            ema: 0.85,
            k_sla: 2.5,
            k_lat: 1.5,
            k_eng: 1.2,
            base_alpha: 0.40,
            base_beta: 0.35,
            base_gamma: 0.25,
        }
    }
}

/// Controlador adaptativo dos pesos de scoring
///
/// A cada atualização: urgências lineares a partir dos sinais, softmax
/// estável (subtrai o máximo), mistura 60/40 com os pesos base, EMA e
/// clip-então-normaliza. A normalização após o clip pode empurrar um
/// componente levemente para fora de `[w_min, w_max]`; isso é aceito e não
/// re-clipado.
#[derive(Debug, Clone)]
pub struct MetaController {
    cfg: MetaConfig,
    w: [f64; 3],
}

impl MetaController {
    /// Cria controlador inicializado nos pesos base
    pub fn new(cfg: MetaConfig) -> Self {
        let w = [cfg.base_alpha, cfg.base_beta, cfg.base_gamma];
        Self { cfg, w }
    }

    /// Pesos vivos correntes
    pub fn weights(&self) -> Weights {
        Weights {
            alpha: self.w[0],
            beta: self.w[1],
            gamma: self.w[2],
        }
    }

    fn clip_norm(&self, mut w: [f64; 3]) -> [f64; 3] {
        for v in &mut w {
            *v = v.clamp(self.cfg.w_min, self.cfg.w_max);
        }
        let sum: f64 = w.iter().sum::<f64>() + 1e-12;
        w.map(|v| v / sum)
    }

    fn softmax(u: [f64; 3]) -> [f64; 3] {
        let max = u.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp = u.map(|v| (v - max).exp());
        let sum: f64 = exp.iter().sum::<f64>() + 1e-12;
        exp.map(|v| v / sum)
    }

    /// Atualiza os pesos a partir dos sinais reduzidos e devolve o novo vetor
    pub fn update(&mut self, phi: &PerformanceSignals) -> Weights {
        let sla_u = self.cfg.k_sla * phi.viol_rate + 0.5 * phi.lat_p90;
        let lat_u = self.cfg.k_lat * phi.congestion + 0.7 * phi.lat_p90;
        let eng_u = self.cfg.k_eng * phi.energy_pressure + 0.3 * phi.eng_p90;

        let p = Self::softmax([sla_u, lat_u, eng_u]);
        let base = [self.cfg.base_alpha, self.cfg.base_beta, self.cfg.base_gamma];
        let mut target = [0.0; 3];
        for i in 0..3 {
            target[i] = 0.6 * base[i] + 0.4 * p[i];
        }
        let target = self.clip_norm(target);

        for i in 0..3 {
            self.w[i] = self.cfg.ema * self.w[i] + (1.0 - self.cfg.ema) * target[i];
        }
        self.w = self.clip_norm(self.w);
        self.weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_weights_are_base() {
        let ctl = MetaController::new(MetaConfig::default());
        let w = ctl.weights();
        assert!((w.alpha - 0.40).abs() < 1e-12);
        assert!((w.beta - 0.35).abs() < 1e-12);
        assert!((w.gamma - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one_after_update() {
        let mut ctl = MetaController::new(MetaConfig::default());
        let phi = PerformanceSignals {
            viol_rate: 0.5,
            lat_p90: 2.0,
            eng_p90: 20.0,
            congestion: 0.01,
            energy_pressure: 0.8,
        };
        for _ in 0..200 {
            let w = ctl.update(&phi);
            assert!((w.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_components_bounded() {
        let cfg = MetaConfig::default();
        let mut ctl = MetaController::new(cfg);
        let phi = PerformanceSignals {
            viol_rate: 1.0,
            lat_p90: 100.0,
            ..Default::default()
        };
        for _ in 0..500 {
            let w = ctl.update(&phi);
            // tolerância para a deriva aceita pós-normalização
            for v in [w.alpha, w.beta, w.gamma] {
                assert!(v >= cfg.w_min - 0.05);
                assert!(v <= cfg.w_max + 0.05);
            }
        }
    }

    #[test]
    fn test_violation_pressure_raises_alpha() {
        let mut ctl = MetaController::new(MetaConfig::default());
        let phi = PerformanceSignals {
            viol_rate: 1.0,
            lat_p90: 1.0,
            ..Default::default()
        };
        let mut w = ctl.weights();
        for _ in 0..100 {
            w = ctl.update(&phi);
        }
        // urgência de SLA dominante empurra α acima do base
        assert!(w.alpha > 0.40);
    }

    #[test]
    fn test_ema_slows_adaptation() {
        let phi = PerformanceSignals {
            viol_rate: 1.0,
            ..Default::default()
        };
        let mut slow = MetaController::new(MetaConfig {
            ema: 0.99,
            ..Default::default()
        });
        let mut fast = MetaController::new(MetaConfig {
            ema: 0.50,
            ..Default::default()
        });
        let w_slow = slow.update(&phi);
        let w_fast = fast.update(&phi);
        let base = 0.40;
        assert!((w_slow.alpha - base).abs() < (w_fast.alpha - base).abs());
    }

    #[test]
    fn test_neutral_signals_keep_weights_near_base() {
        let mut ctl = MetaController::new(MetaConfig::default());
        let phi = PerformanceSignals::default();
        let mut w = ctl.weights();
        for _ in 0..300 {
            w = ctl.update(&phi);
        }
        // softmax uniforme misturada 60/40 com a base converge perto dela
        assert!((w.alpha - (0.6 * 0.40 + 0.4 / 3.0)).abs() < 1e-6);
    }
}
