//! Integration tests for mcpforge-core's pure API: naming, validation and
//! registry surgery on realistic registry files.

use mcpforge_core::domain::{
    BraceScanLocator, ComponentKind, DomainError, DomainValidator, InsertAnchor, Region,
    RegionLocator, RegistrationPlan, RegistrationStyle, StepOutcome, naming,
    surgery::{insert_import, insert_registration},
};

const TOOL_REGISTRY: &str = "import { Tool } from '@modelcontextprotocol/sdk/types.js';
import { EchoTool } from '../tools/echo-tool.js';

export class ToolRegistry {
  private tools = new Map<string, any>();

  constructor() {
    this.initializeTools();
  }

  private initializeTools(): void {
    this.tools.set('echo', new EchoTool());
  }
}
";

fn tool_plan<'a>(registration: &'a str, anchor: InsertAnchor) -> RegistrationPlan<'a> {
    RegistrationPlan {
        method: "initializeTools",
        setter_prefix: "this.tools.set(",
        getter_prefix: "this.tools.get(",
        registration_line: registration,
        initialization_line: "",
        anchor,
        style: RegistrationStyle::Auto,
    }
}

#[test]
fn test_full_registry_patch() {
    let locator = BraceScanLocator::new();
    let import = insert_import(
        TOOL_REGISTRY,
        "import { WeatherTool } from '../tools/weather-tool.js';",
    );
    assert_eq!(import.outcome, StepOutcome::Inserted);

    let registration = insert_registration(
        &import.text,
        &locator,
        &tool_plan(
            "this.tools.set('weather', new WeatherTool());",
            InsertAnchor::EndOfStatement,
        ),
    );
    assert_eq!(registration.outcome, StepOutcome::Inserted);

    let expected = TOOL_REGISTRY
        .replace(
            "import { EchoTool } from '../tools/echo-tool.js';\n",
            "import { EchoTool } from '../tools/echo-tool.js';\nimport { WeatherTool } from '../tools/weather-tool.js';\n",
        )
        .replace(
            "    this.tools.set('echo', new EchoTool());\n",
            "    this.tools.set('echo', new EchoTool());\n    this.tools.set('weather', new WeatherTool());\n",
        );
    assert_eq!(registration.text, expected);
}

#[test]
fn test_single_line_method_scenario() {
    let source = "initializeTools(){ this.tools.set('a', fn); }";
    let plan = tool_plan("this.tools.set('b', fn2);", InsertAnchor::EndOfStatement);
    let locator = BraceScanLocator::new();

    let first = insert_registration(source, &locator, &plan);
    assert_eq!(first.outcome, StepOutcome::Inserted);
    let a = first.text.find("this.tools.set('a', fn);").unwrap();
    let b = first.text.find("this.tools.set('b', fn2);").unwrap();
    assert!(a < b);
    assert!(first.text.trim_end().ends_with('}'));

    let second = insert_registration(&first.text, &locator, &plan);
    assert_eq!(second.outcome, StepOutcome::AlreadyPresent);
    assert_eq!(second.text, first.text);
}

#[test]
fn test_insertion_follows_last_of_several_calls() {
    let source = "initializeTools() {\n  this.tools.set('a', a);\n  this.tools.set('b', b);\n}\n";
    let edit = insert_registration(
        source,
        &BraceScanLocator::new(),
        &tool_plan("this.tools.set('c', c);", InsertAnchor::EndOfLine),
    );

    assert_eq!(
        edit.text,
        "initializeTools() {\n  this.tools.set('a', a);\n  this.tools.set('b', b);\n  this.tools.set('c', c);\n}\n"
    );
}

/// A locator that never finds anything, standing in for an alternative
/// implementation of the seam.
struct NothingLocator;

impl RegionLocator for NothingLocator {
    fn locate(&self, _source: &str, _method: &str) -> Option<Region> {
        None
    }
}

#[test]
fn test_custom_locator_drives_surgery() {
    let edit = insert_registration(
        TOOL_REGISTRY,
        &NothingLocator,
        &tool_plan("this.tools.set('x', new XTool());", InsertAnchor::EndOfStatement),
    );

    assert!(matches!(edit.outcome, StepOutcome::Skipped(_)));
    assert_eq!(edit.text, TOOL_REGISTRY);
}

#[test]
fn test_names_and_identifiers() {
    assert_eq!(
        DomainValidator::validate_component_name("My Thing", ComponentKind::Tool).unwrap(),
        "my-thing"
    );
    assert!(matches!(
        DomainValidator::validate_component_name("my-tool", ComponentKind::Tool),
        Err(DomainError::InvalidComponentName { .. })
    ));
    // Only the kind's own suffix is rejected.
    assert!(DomainValidator::validate_component_name("my-tool", ComponentKind::Prompt).is_ok());

    assert_eq!(naming::type_name(ComponentKind::Resource, "user-profile"), "UserProfileResource");
    assert_eq!(naming::file_name(ComponentKind::Util, "date-format"), "date-format-util.ts");
}
