//! NBMP function and workflow descriptions.

use mediameta::codec::json;
use mediameta::nbmp::descriptors::{ExecutionMode, Placement, RepositoryMode, State};
use mediameta::nbmp::parameter::{self, Range};
use mediameta::nbmp::{
    Brand, Datatype, Function, General, MpeCapabilities, Parameter, ParameterDomain,
    ParameterError, Task, Workflow,
};
use serde_json::{Value, json};

const FUNCTION: &str = include_str!("fixtures/nbmp/function.json");
const WORKFLOW: &str = include_str!("fixtures/nbmp/workflow.json");

const BITRATE: &str = r#"{"name":"bitrate","id":1,"datatype":"integer","values":[{"name":"low","id":1,"restrictions":{"min-value":100,"max-value":1000,"increment":50}}]}"#;

// ============================================================================
// PARAMETERS
// ============================================================================

#[test]
fn test_integer_parameter_decodes_restrictions() {
    let parameter = parameter::decode(BITRATE.as_bytes()).unwrap();
    assert_eq!(parameter.name, "bitrate");
    assert_eq!(parameter.id, 1);
    assert_eq!(parameter.values_len(), 1);

    let ParameterDomain::Integer(values) = &parameter.domain else {
        panic!("expected an integer domain, got {:?}", parameter.domain);
    };
    assert_eq!(values[0].name, "low");
    assert_eq!(
        values[0].restrictions,
        Some(Range {
            min_value: Some(100),
            max_value: Some(1000),
            increment: Some(50),
        })
    );
}

#[test]
fn test_array_parameter_with_values_is_rejected() {
    let input = BITRATE.replace(r#""datatype":"integer""#, r#""datatype":"array""#);
    assert_eq!(
        parameter::decode(input.as_bytes()),
        Err(ParameterError::InvalidValuesForArray)
    );

    // The same failure surfaces through a whole document.
    let mut function: Value = serde_json::from_str(FUNCTION).unwrap();
    function["configuration"]["parameters"][0]["datatype"] = json!("array");
    let err = json::from_slice::<Function>(&serde_json::to_vec(&function).unwrap()).unwrap_err();
    assert!(err.to_string().contains("must not carry values"), "{err}");
}

#[test]
fn test_integer_value_without_restriction_fields_round_trips() {
    let input = json!({
        "name": "level", "id": 7, "datatype": "integer",
        "values": [{ "name": "any", "id": 1, "restrictions": {} }]
    });
    let parameter = parameter::from_value(input.clone()).unwrap();
    let encoded = serde_json::to_value(&parameter).unwrap();
    assert_eq!(encoded, input);
    assert_eq!(parameter::from_value(encoded).unwrap(), parameter);
}

#[test]
fn test_every_datatype_round_trips() {
    let function: Function = json::from_slice(FUNCTION.as_bytes()).unwrap();
    let parameters = &function.configuration.as_ref().unwrap().parameters;

    let datatypes: Vec<Datatype> = parameters.iter().map(Parameter::datatype).collect();
    assert_eq!(
        datatypes,
        [
            Datatype::Integer,
            Datatype::Integer,
            Datatype::String,
            Datatype::Boolean,
            Datatype::Number,
            Datatype::Array,
        ]
    );
    for parameter in parameters {
        let bytes = serde_json::to_vec(parameter).unwrap();
        assert_eq!(&parameter::decode(&bytes).unwrap(), parameter, "{}", parameter.name);
    }
}

#[test]
fn test_unknown_datatype_is_reported() {
    let err = parameter::from_value(json!({ "name": "x", "id": 1, "datatype": "matrix" })).unwrap_err();
    assert_eq!(err, ParameterError::UnknownDatatype("matrix".into()));
}

// ============================================================================
// FUNCTION
// ============================================================================

#[test]
fn test_function_description() {
    let function: Function = json::from_slice(FUNCTION.as_bytes()).unwrap();
    let general = &function.general;
    assert_eq!(general.id, "func-scaler-001");
    assert_eq!(general.nbmp_brand.as_ref().unwrap().token(), "scaler");
    assert_eq!(general.nbmp_brand.as_ref().unwrap().year(), 2023);
    assert_eq!(general.input_ports[0].bind.stream_id, "stream-1");
    assert_eq!(general.is_group, Some(false));

    let input = function.input.as_ref().unwrap();
    assert_eq!(input.media_parameters[0].mime_type.as_deref(), Some("video/mp4"));

    let requirements = function.requirements.as_ref().unwrap();
    let hardware = requirements.hardware.as_ref().unwrap();
    assert_eq!(hardware.vcpu, Some(4));
    assert_eq!(hardware.placement, Some(Placement::SameDataCenter));
    assert_eq!(requirements.flowcontrol.as_ref().unwrap().max_delay, Some(200));

    let configuration = function.configuration.as_ref().unwrap();
    let width = configuration.parameter(1).unwrap();
    assert_eq!(width.conditions, [2]);
    let ParameterDomain::String(filters) = &configuration.parameter(3).unwrap().domain else {
        panic!("expected a string domain");
    };
    assert_eq!(
        filters[0].restrictions.as_deref(),
        Some(["bilinear", "bicubic", "lanczos"].map(String::from).as_slice())
    );
    assert!(matches!(
        &configuration.parameter(6).unwrap().domain,
        ParameterDomain::Array { schema: Some(schema) } if schema["type"] == "array"
    ));
}

#[test]
fn test_function_json_round_trip() {
    let input: Value = serde_json::from_str(FUNCTION).unwrap();
    let function: Function = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&function).unwrap(), input);
}

#[test]
fn test_task_from_function() {
    let function: Function = json::from_slice(FUNCTION.as_bytes()).unwrap();
    let task = Task::from_function(&function, "task-1");
    assert_eq!(task.general.id, "task-1");
    assert_eq!(task.general.name, function.general.name);
    assert_eq!(task.configuration, function.configuration);
    assert!(task.acknowledge.is_none());
}

// ============================================================================
// WORKFLOW
// ============================================================================

#[test]
fn test_workflow_description() {
    let workflow: Workflow = json::from_slice(WORKFLOW.as_bytes()).unwrap();
    assert_eq!(workflow.general.state, Some(State::Running));
    assert_eq!(
        workflow.repository.as_ref().unwrap().mode,
        Some(RepositoryMode::Preferred)
    );

    let connections = workflow.connections();
    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].to.instance.as_deref(), Some("scaler-1"));
    assert_eq!(connections[0].flowcontrol.as_ref().unwrap().typical_delay, Some(40));
    assert_eq!(connections[1].co_located, Some(true));

    let task_requirements = workflow
        .requirements
        .as_ref()
        .and_then(|r| r.workflow_task.as_ref())
        .unwrap();
    assert_eq!(task_requirements.execution_mode, Some(ExecutionMode::Streaming));
}

#[test]
fn test_workflow_json_round_trip() {
    let input: Value = serde_json::from_str(WORKFLOW).unwrap();
    let workflow: Workflow = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&workflow).unwrap(), input);
}

#[test]
fn test_connect_builds_processing() {
    let mut workflow = Workflow::new(General::new("wf-1", "empty"));
    assert!(workflow.connections().is_empty());

    workflow.connect(
        serde_json::from_value(json!({
            "connection-id": "a-to-b",
            "from": { "id": "a", "port-name": "out" },
            "to": { "id": "b", "port-name": "in" }
        }))
        .unwrap(),
    );
    assert_eq!(workflow.connections()[0].connection_id, "a-to-b");

    let encoded = serde_json::to_value(&workflow).unwrap();
    assert_eq!(encoded["processing"]["connection-map"][0]["from"]["port-name"], "out");
}

// ============================================================================
// MPE CAPABILITIES
// ============================================================================

#[test]
fn test_mpe_supports_listed_brands() {
    let mpe: MpeCapabilities = serde_json::from_value(json!({
        "general": { "id": "mpe-1", "name": "edge-node" },
        "capabilities": {
            "functions": [
                { "id": "func-scaler-001", "brand": "urn:mpeg:mpegi:nbmp:2023:scaler", "instances": 4 }
            ],
            "supported-codecs": ["hevc", "avc"]
        }
    }))
    .unwrap();

    let scaler: Brand = "urn:mpeg:mpegi:nbmp:2023:scaler".parse().unwrap();
    let packager: Brand = "urn:mpeg:mpegi:nbmp:2023:packager".parse().unwrap();
    assert!(mpe.supports(&scaler));
    assert!(!mpe.supports(&packager));
    assert_eq!(mpe.capabilities.supported_codecs, ["hevc", "avc"]);
}
