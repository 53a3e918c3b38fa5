//! Geradores de chegadas — Poisson homogêneo e bursty ON/OFF

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use triad_core::task::Task;

use crate::error::{WorkloadError, WorkloadResult};

/// Processo de chegada — variante fechada, rejeitada na construção
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadMode {
    /// Poisson homogêneo com taxa fixa
    Poisson,
    /// Segmentos ON/OFF alternados com taxas distintas
    Bursty,
}

impl FromStr for WorkloadMode {
    type Err = WorkloadError;

    fn from_str(s: &str) -> WorkloadResult<Self> {
        match s {
            "poisson" => Ok(WorkloadMode::Poisson),
            "bursty" => Ok(WorkloadMode::Bursty),
            other => Err(WorkloadError::UnknownMode(other.to_string())),
        }
    }
}

/// Configuração do gerador
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Semente do gerador pseudo-aleatório
    pub seed: u64,
    /// Processo de chegada
    pub mode: WorkloadMode,
    /// Horizonte do episódio (s)
    pub horizon_s: f64,
    /// Taxa base de chegadas (tarefas/s)
    pub lambda_per_s: f64,
    /// Taxa durante rajadas (tarefas/s)
    pub burst_lambda_per_s: f64,
    /// Duração média dos segmentos ON (s)
    pub on_mean_s: f64,
    /// Duração média dos segmentos OFF (s)
    pub off_mean_s: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            mode: WorkloadMode::Poisson,
            horizon_s: 60.0,
            lambda_per_s: 2.0,
            burst_lambda_per_s: 8.0,
            on_mean_s: 4.0,
            off_mean_s: 3.0,
        }
    }
}

/// Gerador determinístico de fluxos `(instante, Task)` com instantes
/// monotonicamente não-decrescentes
#[derive(Debug)]
pub struct WorkloadGenerator {
    cfg: WorkloadConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Cria gerador semeado
    pub fn new(cfg: WorkloadConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(cfg.seed),
            cfg,
        }
    }

    /// Variável exponencial com média `mean_s`, por CDF inversa
    fn exponential(&mut self, mean_s: f64) -> f64 {
        let u: f64 = self.rng.r#gen();
        -(1.0 - u).ln() * mean_s
    }

    /// Variável log-normal via Box–Muller sobre dois uniformes
    fn lognormal(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1: f64 = 1.0 - self.rng.r#gen::<f64>();
        let u2: f64 = self.rng.r#gen();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        (mu + sigma * z).exp()
    }

    fn sample_task(&mut self, idx: usize) -> Task {
        let c_mi = self.lognormal(5.2, 0.5);
        let s_mb = self.lognormal(0.0, 0.8);
        let p = self.rng.gen_range(0..3);
        let base = 0.8 + 0.004 * c_mi + 0.03 * s_mb;
        let d_s = (base - 0.1 * p as f64).max(0.2);
        Task::new(format!("t{idx}"), c_mi, d_s, s_mb, p)
    }

    /// Gera o fluxo completo de chegadas até o horizonte
    pub fn generate(&mut self) -> Vec<(f64, Task)> {
        match self.cfg.mode {
            WorkloadMode::Poisson => self.generate_poisson(),
            WorkloadMode::Bursty => self.generate_bursty(),
        }
    }

    fn generate_poisson(&mut self) -> Vec<(f64, Task)> {
        let mean = 1.0 / self.cfg.lambda_per_s.max(1e-6);
        let horizon = self.cfg.horizon_s;
        let mut arrivals = Vec::new();
        let mut t = 0.0;
        let mut i = 0;
        loop {
            t += self.exponential(mean);
            if t > horizon {
                break;
            }
            let task = self.sample_task(i);
            arrivals.push((t, task));
            i += 1;
        }
        arrivals
    }

    fn generate_bursty(&mut self) -> Vec<(f64, Task)> {
        let horizon = self.cfg.horizon_s;
        let mut arrivals = Vec::new();
        let mut t = 0.0;
        let mut i = 0;
        let mut on = true;
        while t < horizon {
            let seg_mean = if on {
                self.cfg.on_mean_s
            } else {
                self.cfg.off_mean_s
            };
            let seg_end = (t + self.exponential(seg_mean)).min(horizon);
            let lam = if on {
                self.cfg.burst_lambda_per_s
            } else {
                (self.cfg.lambda_per_s * 0.2).max(1e-6)
            };
            let mean = 1.0 / lam;

            loop {
                t += self.exponential(mean);
                if t > seg_end || t > horizon {
                    break;
                }
                let task = self.sample_task(i);
                arrivals.push((t, task));
                i += 1;
            }
            // o salto que cruzou o fim do segmento inicia o próximo
            on = !on;
        }
        arrivals
    }
}
