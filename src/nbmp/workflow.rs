//! Workflow description document.

use serde::{Deserialize, Serialize};

use super::descriptors::{
    Acknowledge, Assertion, ClientAssistant, Configuration, ConnectionMapping, Failover, General,
    Input, Monitoring, Notification, Output, Processing, Reporting, Repository, Requirements,
    Scheme, Security, Step,
};

/// A graph of functions submitted to a workflow manager.
///
/// The graph edges live in `processing.connection-map`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Workflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    pub general: General,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<Processing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_assistant: Option<ClientAssistant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover: Option<Failover>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<Monitoring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion: Option<Assertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<Reporting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledge: Option<Acknowledge>,
}

impl Workflow {
    pub fn new(general: General) -> Self {
        Self {
            general,
            ..Self::default()
        }
    }

    pub fn connections(&self) -> &[ConnectionMapping] {
        self.processing
            .as_ref()
            .map(|processing| processing.connection_map.as_slice())
            .unwrap_or_default()
    }

    /// Add a graph edge, creating the processing descriptor if needed.
    pub fn connect(&mut self, mapping: ConnectionMapping) {
        self.processing
            .get_or_insert_with(Processing::default)
            .connection_map
            .push(mapping);
    }
}
