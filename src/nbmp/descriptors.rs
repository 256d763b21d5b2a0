//! Descriptors shared by function, task and workflow documents.
//!
//! Keys follow ISO/IEC 23090-8 verbatim (kebab-case). Every descriptor is
//! optional in a document and every field inside one is optional unless the
//! schema requires it; absent values are omitted on output.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Brand;
use super::parameter::Parameter;

/// RFC 3339 timestamps, written with a numeric offset and only the
/// fractional digits the value needs (`2023-03-01T12:00:00+00:00`).
mod rfc3339 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| DateTime::parse_from_rfc3339(&text).map_err(de::Error::custom))
            .transpose()
    }
}

/// Identifies the NBMP schema a document conforms to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub uri: String,
}

// ============================================================================
// GENERAL
// ============================================================================

/// Lifecycle state reported for a task or workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum State {
    Instantiated,
    Idle,
    Running,
    InError,
    Destroyed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct General {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbmp_brand: Option<Brand>,
    #[serde(with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub published_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input_ports: Vec<Port>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output_ports: Vec<Port>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

impl General {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A named port bound to one input or output stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Port {
    pub port_name: String,
    pub bind: PortBinding,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PortBinding {
    pub stream_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

// ============================================================================
// REPOSITORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryMode {
    Strict,
    Preferred,
    Available,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Repository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<RepositoryMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<RepositoryLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RepositoryLocation {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// INPUT / OUTPUT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Input {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_parameters: Vec<MediaParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata_parameters: Vec<MetadataParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Output {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_parameters: Vec<MediaParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata_parameters: Vec<MetadataParameter>,
}

/// One media stream entering or leaving a function.
///
/// At most one of the three format lists is expected to be set; this is not
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MediaParameter {
    pub stream_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub video_format: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio_format: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_format: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching_server_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MetadataParameter {
    pub stream_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching_server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_uri: Option<String>,
}

// ============================================================================
// PROCESSING
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Processing {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<ProcessingImage>,
    #[serde(with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connection_map: Vec<ConnectionMapping>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub function_restrictions: Vec<FunctionRestriction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProcessingImage {
    pub is_dynamic: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_image_info: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_image_info: Option<Map<String, Value>>,
}

/// An edge of the workflow graph: one function output feeding another's input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConnectionMapping {
    pub connection_id: String,
    pub from: ConnectionEndpoint,
    pub to: ConnectionEndpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flowcontrol: Option<FlowControl>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_located: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConnectionEndpoint {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub port_name: String,
}

/// Overrides applied to one function instance inside a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FunctionRestriction {
    pub instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<General>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
}

// ============================================================================
// REQUIREMENTS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Requirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flowcontrol: Option<FlowControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Hardware>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_task: Option<WorkflowTaskRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_estimators: Option<Map<String, Value>>,
}

/// Delay in milliseconds, throughput in bits per second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FlowControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_throughput: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_throughput: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averaging_window: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    SameMachine,
    SameRack,
    SameDataCenter,
    Any,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Hardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vgpu: Option<u32>,
    /// Megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<u64>,
    /// Gigabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SecurityRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipsec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cenc: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    Streaming,
    StepStateless,
    StepStateful,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WorkflowTaskRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_fusible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_enhancable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_efficiency: Option<f64>,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl Configuration {
    pub fn parameter(&self, id: u64) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.id == id)
    }
}

// ============================================================================
// CLIENT ASSISTANT / FAILOVER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClientAssistant {
    pub client_assistance_flag: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_collection_list: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_assistance_information: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailoverMode {
    RestartImmediately,
    RestartWithDelay,
    ContinueWithLastGoodState,
    ExecuteBackupDeployment,
    Exit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Failover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_mode: Option<FailoverMode>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_deployment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_interval: Option<u64>,
}

// ============================================================================
// MONITORING / REPORTING / NOTIFICATION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Event {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Variable {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Monitoring {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_events: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_variables: Vec<Variable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Reporting {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_events: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_variables: Vec<Variable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_interval: Option<u64>,
    #[serde(with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub report_start_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Notification {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_events: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_variables: Vec<Variable>,
    #[serde(with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_level: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notification_type: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_interval: Option<u64>,
}

// ============================================================================
// ASSERTION / SECURITY / STEP / ACKNOWLEDGE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Assertion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_priority_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_acknowledgement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assertion: Vec<AssertionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AssertionItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_predicate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Security {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub auth_token_expires: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token_rotation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token_route: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepMode {
    Stream,
    Stateful,
    Stateless,
}

/// Segmented (step) execution of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_mode: Option<StepMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_duration: Option<bool>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_sequence: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operating_units: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_overlap: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spatial_overlap: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcknowledgeStatus {
    Fulfilled,
    Failed,
    NotSupported,
    PartiallyFulfilled,
}

/// Response of the workflow manager to a submitted document; each list
/// holds JSON pointers into that document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Acknowledge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AcknowledgeStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unsupported: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partial: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_media_parameter_keys_are_kebab_case() {
        let parameter = MediaParameter {
            stream_id: "video-in".into(),
            mime_type: Some("video/mp4".into()),
            buffer_size: Some(4096),
            caching_server_url: Some("http://cache.example".into()),
            ..MediaParameter::default()
        };
        assert_eq!(
            serde_json::to_value(&parameter).unwrap(),
            json!({
                "stream-id": "video-in",
                "mime-type": "video/mp4",
                "buffer-size": 4096,
                "caching-server-url": "http://cache.example"
            })
        );
    }

    #[test]
    fn test_connection_map_decodes() {
        let mapping: ConnectionMapping = serde_json::from_value(json!({
            "connection-id": "c1",
            "from": { "id": "decoder", "port-name": "out" },
            "to": { "id": "encoder", "instance": "e1", "port-name": "in" },
            "co-located": true
        }))
        .unwrap();
        assert_eq!(mapping.from.port_name, "out");
        assert_eq!(mapping.to.instance.as_deref(), Some("e1"));
        assert_eq!(mapping.co_located, Some(true));
        assert!(mapping.flowcontrol.is_none());
    }

    #[test]
    fn test_enums_use_schema_spelling() {
        let failover: Failover =
            serde_json::from_value(json!({ "failover-mode": "continue-with-last-good-state" })).unwrap();
        assert_eq!(failover.failover_mode, Some(FailoverMode::ContinueWithLastGoodState));
        assert_eq!(serde_json::to_value(State::InError).unwrap(), json!("in-error"));
        assert_eq!(serde_json::to_value(ExecutionMode::StepStateless).unwrap(), json!("step-stateless"));
    }

    #[test]
    fn test_configuration_lookup_by_id() {
        let configuration: Configuration = serde_json::from_value(json!({
            "parameters": [
                { "name": "a", "id": 1, "datatype": "boolean" },
                { "name": "b", "id": 2, "datatype": "string", "values": [{ "name": "s", "id": 1 }] }
            ]
        }))
        .unwrap();
        assert_eq!(configuration.parameter(2).map(|p| p.name.as_str()), Some("b"));
        assert!(configuration.parameter(3).is_none());
    }

    #[test]
    fn test_null_descriptor_fields_are_absent() {
        let general: General =
            serde_json::from_value(json!({ "id": "f1", "name": "scale", "rank": null })).unwrap();
        assert_eq!(general.rank, None);
        assert_eq!(serde_json::to_value(&general).unwrap(), json!({ "id": "f1", "name": "scale" }));
    }

    #[rstest]
    #[case("2023-03-01T12:00:00+00:00", "2023-03-01T12:00:00+00:00")]
    #[case("2023-03-01T12:00:00Z", "2023-03-01T12:00:00+00:00")]
    #[case("2023-03-01T12:00:00.250+02:00", "2023-03-01T12:00:00.250+02:00")]
    #[case("2023-03-01T12:00:00.000001-05:30", "2023-03-01T12:00:00.000001-05:30")]
    fn test_timestamps_keep_offset_and_precision(#[case] input: &str, #[case] written: &str) {
        let general: General =
            serde_json::from_value(json!({ "id": "f1", "name": "scale", "published-time": input })).unwrap();
        let encoded = serde_json::to_value(&general).unwrap();
        assert_eq!(encoded["published-time"], written);
        assert_eq!(serde_json::from_value::<General>(encoded).unwrap(), general);
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let result = serde_json::from_value::<General>(json!({ "id": "f1", "name": "x", "published-time": "yesterday" }));
        assert!(result.is_err());
    }
}
