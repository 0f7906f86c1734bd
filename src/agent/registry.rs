//! Agent registry
//!
//! This module provides:
//! - The built-in table of supported agents
//! - Agent lookup by id

use std::collections::HashMap;
use std::sync::LazyLock;

use super::AgentDescriptor;

const fn agent(
    id: &'static str,
    display_name: &'static str,
    project_dir: &'static str,
    global_dir: &'static str,
    detect: &'static [&'static str],
) -> AgentDescriptor {
    AgentDescriptor {
        id,
        display_name,
        project_dir,
        global_dir,
        detect,
    }
}

/// Built-in agent definitions, sorted by id
#[rustfmt::skip]
pub static AGENTS: &[AgentDescriptor] = &[
    agent("adal", "AdaL", ".adal/skills", "~/.adal/skills", &["~/.adal"]),
    agent("amp", "Amp", ".agents/skills", "$XDG_CONFIG_HOME/agents/skills", &["$XDG_CONFIG_HOME/amp"]),
    agent("antigravity", "Antigravity", ".agent/skills", "~/.gemini/antigravity/skills", &[".agent", "~/.gemini/antigravity"]),
    agent("augment", "Augment", ".augment/skills", "~/.augment/skills", &["~/.augment"]),
    agent("claude-code", "Claude Code", ".claude/skills", "$CLAUDE_CONFIG_DIR/skills", &["$CLAUDE_CONFIG_DIR"]),
    agent("cline", "Cline", ".cline/skills", "~/.cline/skills", &["~/.cline"]),
    agent("codebuddy", "CodeBuddy", ".codebuddy/skills", "~/.codebuddy/skills", &[".codebuddy", "~/.codebuddy"]),
    agent("codex", "Codex", ".agents/skills", "$CODEX_HOME/skills", &["$CODEX_HOME", "/etc/codex"]),
    agent("command-code", "Command Code", ".commandcode/skills", "~/.commandcode/skills", &["~/.commandcode"]),
    agent("continue", "Continue", ".continue/skills", "~/.continue/skills", &[".continue", "~/.continue"]),
    agent("crush", "Crush", ".crush/skills", "~/.config/crush/skills", &["~/.config/crush"]),
    agent("cursor", "Cursor", ".cursor/skills", "~/.cursor/skills", &["~/.cursor"]),
    agent("droid", "Droid", ".factory/skills", "~/.factory/skills", &["~/.factory"]),
    agent("gemini-cli", "Gemini CLI", ".agents/skills", "~/.gemini/skills", &["~/.gemini"]),
    agent("github-copilot", "GitHub Copilot", ".agents/skills", "~/.copilot/skills", &[".github", "~/.copilot"]),
    agent("goose", "Goose", ".goose/skills", "$XDG_CONFIG_HOME/goose/skills", &["$XDG_CONFIG_HOME/goose"]),
    agent("iflow-cli", "iFlow CLI", ".iflow/skills", "~/.iflow/skills", &["~/.iflow"]),
    agent("junie", "Junie", ".junie/skills", "~/.junie/skills", &["~/.junie"]),
    agent("kilo", "Kilo Code", ".kilocode/skills", "~/.kilocode/skills", &["~/.kilocode"]),
    agent("kimi-cli", "Kimi Code CLI", ".agents/skills", "~/.config/agents/skills", &["~/.kimi"]),
    agent("kiro-cli", "Kiro CLI", ".kiro/skills", "~/.kiro/skills", &["~/.kiro"]),
    agent("kode", "Kode", ".kode/skills", "~/.kode/skills", &["~/.kode"]),
    agent("mcpjam", "MCPJam", ".mcpjam/skills", "~/.mcpjam/skills", &["~/.mcpjam"]),
    agent("mistral-vibe", "Mistral Vibe", ".vibe/skills", "~/.vibe/skills", &["~/.vibe"]),
    agent("mux", "Mux", ".mux/skills", "~/.mux/skills", &["~/.mux"]),
    agent("neovate", "Neovate", ".neovate/skills", "~/.neovate/skills", &["~/.neovate"]),
    agent("openclaw", "OpenClaw", "skills", "~/.openclaw/skills", &["~/.openclaw", "~/.clawdbot", "~/.moltbot"]),
    agent("opencode", "OpenCode", ".agents/skills", "$XDG_CONFIG_HOME/opencode/skills", &["$XDG_CONFIG_HOME/opencode"]),
    agent("openhands", "OpenHands", ".openhands/skills", "~/.openhands/skills", &["~/.openhands"]),
    agent("pi", "Pi", ".pi/skills", "~/.pi/agent/skills", &["~/.pi/agent"]),
    agent("pochi", "Pochi", ".pochi/skills", "~/.pochi/skills", &["~/.pochi"]),
    agent("qoder", "Qoder", ".qoder/skills", "~/.qoder/skills", &["~/.qoder"]),
    agent("qwen-code", "Qwen Code", ".qwen/skills", "~/.qwen/skills", &["~/.qwen"]),
    agent("replit", "Replit", ".agents/skills", "$XDG_CONFIG_HOME/agents/skills", &[".agents"]),
    agent("roo", "Roo Code", ".roo/skills", "~/.roo/skills", &["~/.roo"]),
    agent("trae", "Trae", ".trae/skills", "~/.trae/skills", &["~/.trae"]),
    agent("trae-cn", "Trae CN", ".trae/skills", "~/.trae-cn/skills", &["~/.trae-cn"]),
    agent("windsurf", "Windsurf", ".windsurf/skills", "~/.codeium/windsurf/skills", &["~/.codeium/windsurf"]),
    agent("zencoder", "Zencoder", ".zencoder/skills", "~/.zencoder/skills", &["~/.zencoder"]),
];

static BUILTIN: LazyLock<AgentRegistry> = LazyLock::new(|| AgentRegistry::new(AGENTS));

/// Registry of supported agents, indexed by id
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: &'static [AgentDescriptor],
    by_id: HashMap<&'static str, usize>,
}

impl AgentRegistry {
    /// Create a registry over the given agents
    pub fn new(agents: &'static [AgentDescriptor]) -> Self {
        let by_id = agents
            .iter()
            .enumerate()
            .map(|(idx, a)| (a.id, idx))
            .collect();
        Self { agents, by_id }
    }

    /// The registry of built-in agents
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Get an agent by its id
    pub fn get(&self, id: &str) -> Option<&'static AgentDescriptor> {
        let agents = self.agents;
        self.by_id.get(id).map(|&idx| &agents[idx])
    }

    /// All agents, in table order
    pub fn all(&self) -> &'static [AgentDescriptor] {
        self.agents
    }

    /// All agent ids in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.agents.iter().map(|a| a.id).collect();
        names.sort_unstable();
        names
    }
}
