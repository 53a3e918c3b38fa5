//! Prelude — importação conveniente dos tipos centrais
//!
//! ```ignore
//! use triad_core::prelude::*;
//! ```

pub use crate::constants;
pub use crate::env::{EdgeCloudEnv, NodeSnapshot, StateSnapshot, StepResult};
pub use crate::error::{CoreError, CoreResult};
pub use crate::network::{Link, NetworkModel, transfer_time_s};
pub use crate::node::{Node, NodeKind, NodeRuntime};
pub use crate::resources::ResourcePool;
pub use crate::sla::{SlaConfig, sla_penalty, violation_indicator};
pub use crate::task::Task;
