//! Media Processing Entity capabilities.

use serde::{Deserialize, Serialize};

use super::Brand;
use super::descriptors::{
    FlowControl, General, Hardware, Notification, Reporting, Security, SecurityRequirements,
};

/// What an MPE can run, as reported to the workflow manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MpeCapabilities {
    pub general: General,
    pub capabilities: MpeCapabilityDescription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<Reporting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
}

impl MpeCapabilities {
    /// Whether a function with this brand can be scheduled here.
    pub fn supports(&self, brand: &Brand) -> bool {
        self.capabilities
            .functions
            .iter()
            .any(|function| function.brand.as_ref() == Some(brand))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MpeCapabilityDescription {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<SupportedFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Hardware>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flowcontrol: Option<FlowControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRequirements>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_protocols: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_codecs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SupportedFunction {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    /// Concurrent instances the MPE can host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
}
