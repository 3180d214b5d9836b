//! Unit tests for elements, options and error messages.
mod common;
use actionseq::prelude::*;
use common::*;

#[test]
fn test_select_single_node_walks_child_names() {
    let element = suspend_job_element();
    assert_eq!(
        element
            .select_single_node("component-definition/jobName")
            .map(SerializedElement::text),
        Some("nightly-report")
    );
    assert_eq!(
        element.select_single_node("./component-definition//jobAction"),
        element.select_single_node("component-definition/jobAction")
    );
    assert_eq!(element.select_single_node(""), Some(&element));
    assert!(element.select_single_node("component-definition/missing").is_none());
    assert!(element.select_single_node("jobAction").is_none());
}

#[test]
fn test_text_equals_is_exact() {
    let element = Element::new("jobAction").with_text("suspendJob");
    assert!(element.text_equals("suspendJob"));
    assert!(!element.text_equals("suspendjob"));
    assert!(!element.text_equals("suspendJob "));
}

#[test]
fn test_set_text_at_creates_missing_path_once() {
    let mut element = Element::new("action-definition");
    element.set_text_at("component-definition/jobAction", "resumeJob");
    element.set_text_at("component-definition/jobName", "cleanup");
    element.set_text_at("component-definition/jobAction", "deleteJob");

    assert_eq!(element.children.len(), 1);
    let definition = element.child("component-definition").unwrap();
    assert_eq!(definition.children.len(), 2);
    assert_eq!(definition.child("jobAction").unwrap().text(), "deleteJob");
}

#[test]
fn test_element_json_omits_empty_fields() {
    let element = Element::new("component-definition")
        .with_child(Element::new("jobAction").with_text("suspendJob"));
    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "component-definition",
            "children": [{ "name": "jobAction", "text": "suspendJob" }]
        })
    );
}

#[test]
fn test_sequence_options_from_json() {
    let legacy = SequenceOptions::from_json(r#"{ "parentBinding": "legacy" }"#).unwrap();
    assert_eq!(legacy.parent_binding, ParentBinding::Legacy);

    let defaults = SequenceOptions::from_json("{}").unwrap();
    assert_eq!(defaults, SequenceOptions::default());
    assert_eq!(defaults.parent_binding, ParentBinding::Container);

    let err = SequenceOptions::from_json(r#"{ "parentBinding": "sideways" }"#).unwrap_err();
    assert!(matches!(err, ModelError::OptionsParseError(_)));
}

#[test]
fn test_builder_applies_options() {
    let options = SequenceOptions {
        parent_binding: ParentBinding::Legacy,
    };
    let sequence = ActionSequence::builder().options(options.clone()).build();
    assert_eq!(sequence.options(), &options);
    assert_eq!(ActionSequence::new().options(), &SequenceOptions::default());
    assert_eq!(sequence.statement_count(), 1);
}

#[test]
fn test_action_display() {
    assert_eq!(suspend().to_string(), "suspendJob(jobName)");
    assert_eq!(
        Action::new(ActionKind::SuspendScheduler).to_string(),
        "suspendScheduler()"
    );
    assert_eq!(ActionKind::DeleteScheduledJob.to_string(), "deleteJob");
}

#[test]
fn test_command_lookup_covers_every_builtin() {
    let registry = ActionRegistry::default();
    for kind in ActionKind::ALL {
        assert_eq!(registry.kind_for_command(kind.command_id()), Some(*kind));
    }
    assert_eq!(registry.kind_for_command("startJob"), None);
}

#[test]
fn test_error_display() {
    let mut sequence = ActionSequence::new();
    let detached = sequence.create_if("x");

    let err = sequence.root_document(detached).unwrap_err();
    assert!(err.to_string().contains(&detached.to_string()));

    let err = ModelError::UnknownStatement(detached);
    assert_eq!(
        err.to_string(),
        format!("Statement #{} is not part of this action sequence", detached.index())
    );

    let err = RecognitionError::DuplicateCommand {
        command: "suspendJob".to_string(),
    };
    assert!(err.to_string().contains("suspendJob"));
}
