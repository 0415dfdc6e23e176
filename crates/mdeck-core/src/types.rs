//! Machine context and query request types
//!
//! These are the client-owned halves of the backend contract: the structured
//! machine attributes the operator edits, and the wire shape of an outbound
//! diagnostic query. Only the latest [`MachineContext`] is meaningful; it is
//! re-sent in full with every query.

use serde::{Deserialize, Serialize};

/// Machine category, serialized with the backend's display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum MachineKind {
    #[default]
    Motor,
    #[serde(rename = "CNC Machine")]
    CncMachine,
    #[serde(rename = "Conveyor Belt")]
    ConveyorBelt,
    #[serde(rename = "Hydraulic Pump")]
    HydraulicPump,
}

impl MachineKind {
    /// All kinds, in the order the form cycles through them.
    pub const ALL: [MachineKind; 4] = [
        MachineKind::Motor,
        MachineKind::CncMachine,
        MachineKind::ConveyorBelt,
        MachineKind::HydraulicPump,
    ];

    /// Display label, identical to the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            MachineKind::Motor => "Motor",
            MachineKind::CncMachine => "CNC Machine",
            MachineKind::ConveyorBelt => "Conveyor Belt",
            MachineKind::HydraulicPump => "Hydraulic Pump",
        }
    }

    /// Next kind in cycle order (wraps around).
    pub fn next(&self) -> MachineKind {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous kind in cycle order (wraps around).
    pub fn prev(&self) -> MachineKind {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for MachineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured machine attributes accompanying every diagnostic query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MachineContext {
    #[serde(rename = "machine_type")]
    pub machine_kind: MachineKind,
    pub model: String,
    pub age_years: f64,
    pub operating_hours: f64,
}

impl Default for MachineContext {
    fn default() -> Self {
        Self {
            machine_kind: MachineKind::Motor,
            model: "ABB M3AA 132".to_string(),
            age_years: 5.0,
            operating_hours: 12500.0,
        }
    }
}

/// Wire shape of an outbound diagnostic query: `POST /query`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub machine_context: MachineContext,
}
