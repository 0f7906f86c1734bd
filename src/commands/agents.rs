//! Agents command implementation

use super::Context;
use crate::agent::{Agent, AgentRegistry};
use crate::error::Result;
use crate::ui;

/// List every supported agent
pub fn run(ctx: &Context) -> Result<()> {
    let registry = AgentRegistry::builtin();
    if ctx.json {
        let agents: Vec<Agent> = registry.all().iter().map(|a| a.to_agent(&ctx.env)).collect();
        return ui::print_agents(&agents, true);
    }
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
