//! Built-in TypeScript component templates.
//!
//! Placeholders use the `{{VAR}}` syntax understood by
//! [`RenderContext`](mcpforge_core::domain::RenderContext). Besides the
//! built-in variables, the generator supplies `DESCRIPTION_LITERAL` (the
//! description escaped for a single-quoted string), `DESCRIPTION_DOC` (the
//! description made safe inside a `/** */` block) and `AUTHOR_TAG` (a
//! `@author` doc line, or nothing).

use mcpforge_core::domain::ComponentKind;

/// Source template for a component file of `kind`.
pub fn file_template(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Tool => TOOL,
        ComponentKind::Resource => RESOURCE,
        ComponentKind::Prompt => PROMPT,
        ComponentKind::Service => SERVICE,
        ComponentKind::Transport => TRANSPORT,
        ComponentKind::Util => UTIL,
    }
}

pub const INDEX_EXPORT: &str = "export { {{TYPE_NAME}} } from './{{FILE_STEM}}.js';";

pub const REGISTRY_IMPORT: &str =
    "import { {{TYPE_NAME}} } from '../{{DIRECTORY}}/{{FILE_STEM}}.js';";

pub const REGISTRY_SET: &str = "this.{{DIRECTORY}}.set('{{NAME}}', new {{TYPE_NAME}}());";

pub const REGISTRY_INITIALIZE: &str =
    "await this.{{DIRECTORY}}.get('{{NAME}}')?.initialize?.();";

const TOOL: &str = r#"/**
 * {{DESCRIPTION_DOC}}
 *{{AUTHOR_TAG}}
 * Part of {{PROJECT_NAME}}.
 */

export interface {{TYPE_NAME}}Input {
  input: string;
}

export class {{TYPE_NAME}} {
  readonly name = '{{NAME}}';
  readonly description = '{{DESCRIPTION_LITERAL}}';
  readonly inputSchema = {
    type: 'object',
    properties: {
      input: { type: 'string', description: 'Input for {{NAME}}' },
    },
    required: ['input'],
  } as const;

  async initialize(): Promise<void> {
    // Acquire clients or warm caches here.
  }

  async execute(args: {{TYPE_NAME}}Input) {
    return {
      content: [
        {
          type: 'text' as const,
          text: `{{NAME}} received: ${args.input}`,
        },
      ],
    };
  }
}
"#;

const RESOURCE: &str = r#"/**
 * {{DESCRIPTION_DOC}}
 *{{AUTHOR_TAG}}
 * Part of {{PROJECT_NAME}}.
 */

export class {{TYPE_NAME}} {
  readonly uri = 'resource://{{NAME}}';
  readonly name = '{{NAME}}';
  readonly description = '{{DESCRIPTION_LITERAL}}';
  readonly mimeType = 'application/json';

  async initialize(): Promise<void> {
    // Open connections or load data here.
  }

  async read() {
    return {
      contents: [
        {
          uri: this.uri,
          mimeType: this.mimeType,
          text: JSON.stringify({ name: this.name, generatedAt: new Date().toISOString() }),
        },
      ],
    };
  }
}
"#;

const PROMPT: &str = r#"/**
 * {{DESCRIPTION_DOC}}
 *{{AUTHOR_TAG}}
 * Part of {{PROJECT_NAME}}.
 */

export class {{TYPE_NAME}} {
  readonly name = '{{NAME}}';
  readonly description = '{{DESCRIPTION_LITERAL}}';
  readonly arguments = [
    { name: 'topic', description: 'What the prompt is about', required: true },
  ];

  async initialize(): Promise<void> {
    // Load prompt fragments here.
  }

  async getMessages(args: { topic: string }) {
    return {
      messages: [
        {
          role: 'user' as const,
          content: { type: 'text' as const, text: `{{NAME}}: ${args.topic}` },
        },
      ],
    };
  }
}
"#;

const SERVICE: &str = r#"/**
 * {{DESCRIPTION_DOC}}
 *{{AUTHOR_TAG}}
 * Part of {{PROJECT_NAME}}.
 */

export class {{TYPE_NAME}} {
  private started = false;

  async start(): Promise<void> {
    this.started = true;
  }

  async stop(): Promise<void> {
    this.started = false;
  }

  isRunning(): boolean {
    return this.started;
  }
}

export const {{INSTANCE_NAME}} = new {{TYPE_NAME}}();
"#;

const TRANSPORT: &str = r#"/**
 * {{DESCRIPTION_DOC}}
 *{{AUTHOR_TAG}}
 * Part of {{PROJECT_NAME}}.
 */

export type {{TYPE_NAME}}Handler = (message: unknown) => void | Promise<void>;

export class {{TYPE_NAME}} {
  private handler?: {{TYPE_NAME}}Handler;

  onMessage(handler: {{TYPE_NAME}}Handler): void {
    this.handler = handler;
  }

  async start(): Promise<void> {}

  async send(message: unknown): Promise<void> {
    await this.handler?.(message);
  }

  async close(): Promise<void> {
    this.handler = undefined;
  }
}
"#;

const UTIL: &str = r#"/**
 * {{DESCRIPTION_DOC}}
 *{{AUTHOR_TAG}}
 * Part of {{PROJECT_NAME}}.
 */

export class {{TYPE_NAME}} {
  static describe(value: unknown): string {
    return `{{NAME}}: ${JSON.stringify(value)}`;
  }
}
"#;
