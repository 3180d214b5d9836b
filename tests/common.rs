//! Common test utilities for building elements and sequences.
use actionseq::prelude::*;

/// Builds a job scheduler action definition carrying `command`.
///
/// Shape: `action-definition/{component-name, component-definition/jobAction}`
#[allow(dead_code)]
pub fn scheduler_element(component: &str, command: &str) -> Element {
    Element::new("action-definition")
        .with_child(Element::new("component-name").with_text(component))
        .with_child(
            Element::new("component-definition")
                .with_child(Element::new("jobName").with_text("nightly-report"))
                .with_child(Element::new("jobAction").with_text(command)),
        )
}

/// A well-formed "suspend scheduled job" element using the qualified component name.
#[allow(dead_code)]
pub fn suspend_job_element() -> Element {
    scheduler_element("org.pentaho.component.JobSchedulerComponent", "suspendJob")
}

/// An action definition for an unrelated component.
#[allow(dead_code)]
pub fn foreign_element() -> Element {
    Element::new("action-definition")
        .with_child(Element::new("component-name").with_text("JavascriptRule"))
        .with_child(
            Element::new("component-definition")
                .with_child(Element::new("script").with_text("out = 1;")),
        )
}

/// A suspend action, freshly built.
#[allow(dead_code)]
pub fn suspend() -> Action {
    Action::new(ActionKind::SuspendScheduledJob)
}

/// A resume action, freshly built.
#[allow(dead_code)]
pub fn resume() -> Action {
    Action::new(ActionKind::ResumeScheduledJob)
}

/// Command identifiers of the actions directly under `container`, in order.
#[allow(dead_code)]
pub fn child_commands(sequence: &ActionSequence, container: StatementId) -> Vec<&'static str> {
    sequence
        .children(container)
        .unwrap()
        .iter()
        .filter_map(|id| sequence.action(*id))
        .map(Action::command_id)
        .collect()
}

/// Labels of the statements directly under `container`, in order.
#[allow(dead_code)]
pub fn child_labels(sequence: &ActionSequence, container: StatementId) -> Vec<&'static str> {
    sequence
        .children(container)
        .unwrap()
        .iter()
        .map(|id| sequence.kind(*id).unwrap().label())
        .collect()
}
