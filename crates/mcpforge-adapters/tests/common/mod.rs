//! Shared fixture: a freshly generated MCP server project.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use mcpforge_adapters::TypeScriptGenerator;
use mcpforge_core::application::{
    AddComponentService, BackupManager, PatcherSettings, RegistryPatcher, ports::Filesystem,
};

pub const MANIFEST: &str = r#"{
  "name": "weather-server",
  "version": "0.1.0",
  "type": "module",
  "dependencies": {
    "@modelcontextprotocol/sdk": "^1.0.0"
  },
  "devDependencies": {
    "typescript": "^5.4.0"
  }
}
"#;

pub const TOOL_REGISTRY: &str = "import { Tool } from '@modelcontextprotocol/sdk/types.js';
import { EchoTool } from '../tools/echo-tool.js';

export class ToolRegistry {
  private tools = new Map<string, any>();

  constructor() {
    this.initializeTools();
  }

  private initializeTools(): void {
    this.tools.set('echo', new EchoTool());
  }

  list(): Tool[] {
    return [...this.tools.values()];
  }
}
";

/// Older registry layout: every registration is followed by an explicit
/// initialization call.
pub const RESOURCE_REGISTRY: &str = "import { StatusResource } from '../resources/status-resource.js';

export class ResourceRegistry {
  private resources = new Map<string, any>();

  async initialize(): Promise<void> {
    await this.initializeResources();
  }

  private async initializeResources(): Promise<void> {
    this.resources.set('status', new StatusResource());
    await this.resources.get('status')?.initialize?.();
  }
}
";

/// No imports and no registrations yet, only a placeholder comment.
pub const PROMPT_REGISTRY: &str = "export class PromptRegistry {
  private prompts = new Map<string, any>();

  private initializePrompts(): void {
    // Prompts are registered here
  }
}
";

/// Write the fixture project under `root` through `fs`.
pub fn write_project(fs: &dyn Filesystem, root: &Path) {
    let files = [
        ("package.json", MANIFEST),
        ("src/index.ts", "import './core/server.js';\n"),
        ("src/core/server.ts", "export class Server {}\n"),
        ("src/core/tool-registry.ts", TOOL_REGISTRY),
        ("src/core/resource-registry.ts", RESOURCE_REGISTRY),
        ("src/core/prompt-registry.ts", PROMPT_REGISTRY),
        ("src/tools/index.ts", "export { EchoTool } from './echo-tool.js';\n"),
        ("src/tools/echo-tool.ts", "export class EchoTool {}\n"),
        (
            "src/resources/index.ts",
            "export { StatusResource } from './status-resource.js';\n",
        ),
        ("src/resources/status-resource.ts", "export class StatusResource {}\n"),
        ("src/prompts/index.ts", ""),
    ];

    for (path, content) in files {
        fs.write_file(&root.join(path), content)
            .expect("fixture file should be writable");
    }
}

/// Orchestrator wired with the built-in generator and default settings.
pub fn service(fs: Arc<dyn Filesystem>) -> AddComponentService {
    service_with(fs, PatcherSettings::default())
}

pub fn service_with(fs: Arc<dyn Filesystem>, settings: PatcherSettings) -> AddComponentService {
    AddComponentService::new(
        fs.clone(),
        Arc::new(TypeScriptGenerator::new()),
        BackupManager::new(fs.clone()),
        RegistryPatcher::new(fs, settings),
    )
}
