//! Post-injection mapping report
//!
//! A serializable summary of every mapped class pair, published after a run
//! so plugin developers can audit the mapping. Rows follow the bridge's
//! pair order, which keeps the output stable across runs.

use crate::bridge::SymbolBridge;
use serde::Serialize;

/// One member's readable/shipped identity
#[derive(Debug, Clone, Serialize)]
pub struct MemberMapping {
    /// Readable-model member name
    pub readable: String,
    /// Effective name in the shipped binary
    pub shipped: String,
    /// Effective descriptor in the shipped binary
    pub descriptor: String,
    /// Export name, when the member is published to the host API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
}

/// One mapped class pair with its member records
#[derive(Debug, Clone, Serialize)]
pub struct ClassMapping {
    /// Readable-model class name
    pub readable: String,
    /// Shipped class name
    pub shipped: String,
    /// Export name, when the class is published to the host API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
    /// Method records in declaration order
    pub methods: Vec<MemberMapping>,
    /// Field records in declaration order
    pub fields: Vec<MemberMapping>,
}

/// The whole mapping, one row per mapped class pair
#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    /// Class rows in pair order
    pub classes: Vec<ClassMapping>,
}

impl MappingReport {
    /// Build the report over the bridge's mapped pairs
    pub fn build(bridge: &SymbolBridge) -> MappingReport {
        let classes = bridge
            .mapped_pairs()
            .map(|(readable_id, shipped_id)| {
                let readable = &bridge.readable()[readable_id];
                let shipped = &bridge.shipped()[shipped_id];

                let methods = readable
                    .methods
                    .iter()
                    .map(|m| MemberMapping {
                        readable: m.name.clone(),
                        shipped: m.shipped_name().to_string(),
                        descriptor: m.shipped_signature().to_string(),
                        export: m.export.clone(),
                    })
                    .collect();

                let fields = readable
                    .fields
                    .iter()
                    .map(|f| MemberMapping {
                        readable: f.name.clone(),
                        shipped: f.shipped_name().to_string(),
                        descriptor: f.shipped_ty().to_string(),
                        export: f.export.clone(),
                    })
                    .collect();

                ClassMapping {
                    readable: readable.name.clone(),
                    shipped: shipped.name.clone(),
                    export: readable.export.clone(),
                    methods,
                    fields,
                }
            })
            .collect();

        MappingReport { classes }
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
