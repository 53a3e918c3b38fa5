//! # ⚖️ triad-meta — Sinais de Desempenho e Controle Adaptativo de Pesos
//!
//! Acompanha o desempenho recente do sistema em janelas deslizantes e adapta
//! a importância relativa de risco, latência e energia (α, β, γ) usada no
//! scoring de repair/fallback. O laço de controle é limitado e estável:
//! softmax numericamente segura, mistura com os pesos base, suavização
//! exponencial e clip-então-normaliza no simplexo.
//!
//! ## Laço de controle
//!
//! ```text
//! StepResult ──▶ SignalTracker ──▶ phi() ──▶ MetaController ──▶ (α, β, γ)
//!                (5 janelas)       (redução)  (urgências →
//!                                              softmax → EMA)
//! ```

pub mod controller;
pub mod signals;

// Re-exports
pub use controller::{MetaConfig, MetaController, Weights};
pub use signals::{PerformanceSignals, SignalConfig, SignalTracker};
