//! Capability tool abstraction for agent-framework consumption.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A self-describing callable unit: an automated agent discovers it by name,
/// description, and input schema, then invokes it with a JSON argument object.
///
/// The name/description/schema triple is capability-discovery metadata and is
/// part of the contract with the calling agent.
#[async_trait]
pub trait AgentTool: Send + Sync {
    /// Stable tool name used for discovery and dispatch.
    fn name(&self) -> &'static str;

    /// Human-readable description consumed by the calling agent.
    fn description(&self) -> &'static str;

    /// JSON schema of the tool's input arguments.
    fn input_schema(&self) -> Value;

    /// Execute the tool once. External-client errors propagate unchanged.
    async fn invoke(&self, args: Value) -> Result<Value>;
}
