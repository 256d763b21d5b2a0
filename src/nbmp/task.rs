//! Task description document: a function instance scheduled on an MPE.

use serde::{Deserialize, Serialize};

use super::descriptors::{
    Acknowledge, Assertion, ClientAssistant, Configuration, Failover, General, Input, Monitoring,
    Notification, Output, Processing, Reporting, Requirements, Security, Step,
};
use super::function::Function;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Task {
    pub general: General,
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

impl Task {
    /// A task instantiating `function`, carrying over its descriptors.
    pub fn from_function(function: &Function, id: impl Into<String>) -> Self {
        let mut general = function.general.clone();
        general.id = id.into();
        general.state = None;
        Self {
            general,
            input: function.input.clone(),
            output: function.output.clone(),
            processing: function.processing.clone(),
            requirements: function.requirements.clone(),
            configuration: function.configuration.clone(),
            client_assistant: function.client_assistant.clone(),
            failover: function.failover.clone(),
            monitoring: function.monitoring.clone(),
            assertion: function.assertion.clone(),
            reporting: function.reporting.clone(),
            notification: function.notification.clone(),
            security: function.security.clone(),
            step: function.step.clone(),
            acknowledge: None,
        }
    }
}
