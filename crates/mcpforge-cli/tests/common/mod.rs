//! Fixture project and command builder shared by the binary tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const TOOL_REGISTRY: &str = "import { EchoTool } from '../tools/echo-tool.js';

export class ToolRegistry {
  private tools = new Map<string, any>();

  private initializeTools(): void {
    this.tools.set('echo', new EchoTool());
  }
}
";

const FILES: &[(&str, &str)] = &[
    (
        "package.json",
        r#"{ "name": "weather-server", "dependencies": { "@modelcontextprotocol/sdk": "^1.0.0" } }"#,
    ),
    ("src/index.ts", "import './core/server.js';\n"),
    ("src/core/server.ts", "export class Server {}\n"),
    ("src/core/tool-registry.ts", TOOL_REGISTRY),
    (
        "src/core/resource-registry.ts",
        "export class ResourceRegistry {\n  private initializeResources(): void {\n  }\n}\n",
    ),
    (
        "src/core/prompt-registry.ts",
        "export class PromptRegistry {\n  private initializePrompts(): void {\n  }\n}\n",
    ),
    ("src/tools/index.ts", "export { EchoTool } from './echo-tool.js';\n"),
    ("src/tools/echo-tool.ts", "export class EchoTool {}\n"),
    ("src/resources/index.ts", ""),
    ("src/prompts/index.ts", ""),
];

/// A temporary directory holding a generated server under `project/`.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for (path, content) in FILES {
            let full = dir.path().join("project").join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        Self { dir }
    }

    /// Same layout, without a project in it.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }

    /// `mcpforge` run from the fixture directory, isolated from the user's
    /// config, logging and colour settings.
    pub fn mcpforge(&self) -> Command {
        command_in(self.dir.path())
    }
}

pub fn command_in(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mcpforge");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MCPFORGE_REGISTRY__ANCHOR")
        .env_remove("MCPFORGE_BACKUP__DIR_NAME");
    cmd
}
