pub mod capability;
pub mod tools;

pub use capability::AgentTool;
pub use tools::{HealthCheckTool, ListLeaguesTool, ListTeamsTool, SportsToolkit};
