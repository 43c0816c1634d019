//! Scenario tests driving machines through the public API.

use rewind::builder::state;
use rewind::core::State;
use rewind::{
    event_enum, state_enum, MachineConfig, MachineError, StateMachine, StateMachineBuilder, Table,
};

state_enum! {
    enum Document {
        Draft,
        Review,
        Published,
        Archived,
    }
}

event_enum! {
    enum Action {
        Submit,
        Approve,
        Reject,
        Archive,
    }
}

fn document_machine() -> StateMachine<Document, Action> {
    StateMachineBuilder::new()
        .initial(Document::Draft)
        .transition(Document::Draft, Action::Submit, Document::Review)
        .transition(Document::Review, Action::Approve, Document::Published)
        .transition(Document::Review, Action::Reject, Document::Draft)
        .transition(Document::Published, Action::Archive, Document::Archived)
        .state(Document::Archived)
        .build()
        .unwrap()
}

#[test]
fn typed_workflow_round_trip() {
    let mut machine = document_machine();

    machine.trigger(&Action::Submit).unwrap();
    machine.trigger(&Action::Approve).unwrap();
    machine.trigger(&Action::Archive).unwrap();
    assert_eq!(machine.state(), &Document::Archived);

    assert!(machine.undo());
    assert!(machine.undo());
    assert!(machine.undo());
    assert_eq!(machine.state(), &Document::Draft);
    assert!(!machine.undo());

    assert!(machine.redo());
    assert_eq!(machine.state(), &Document::Review);
}

#[test]
fn errors_name_the_offending_identifiers() {
    let mut machine = document_machine();

    let error = machine.trigger(&Action::Approve).unwrap_err();
    assert_eq!(
        error,
        MachineError::NoTransition {
            state: "Draft".to_string(),
            event: "Approve".to_string(),
        }
    );
    assert_eq!(
        error.to_string(),
        "No transition for event 'Approve' from state 'Draft'"
    );
}

#[test]
fn branching_after_undo_replaces_redo_branch() {
    let mut machine = document_machine();
    machine.trigger(&Action::Submit).unwrap();
    machine.trigger(&Action::Approve).unwrap();

    assert!(machine.undo());
    assert_eq!(machine.state(), &Document::Review);
    assert!(machine.can_redo());

    machine.trigger(&Action::Reject).unwrap();

    assert!(!machine.redo());
    assert_eq!(
        machine.history().entries(),
        [Document::Draft, Document::Review, Document::Draft]
    );
}

#[test]
fn states_query_by_event() {
    let machine = document_machine();

    assert_eq!(
        machine.states(None),
        [
            &Document::Draft,
            &Document::Review,
            &Document::Published,
            &Document::Archived
        ]
    );
    assert_eq!(machine.states(Some(&Action::Reject)), [&Document::Review]);
    let names: Vec<&str> = machine
        .states(Some(&Action::Submit))
        .into_iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(names, ["Draft"]);
}

#[test]
fn reset_does_not_record_history() {
    let mut machine = document_machine();
    machine.trigger(&Action::Submit).unwrap();
    machine.trigger(&Action::Approve).unwrap();

    machine.reset();

    assert_eq!(machine.state(), &Document::Draft);
    assert_eq!(machine.history().len(), 3);
    assert_eq!(machine.history().cursor(), 2);
    assert!(!machine.redo());
}

#[test]
fn missing_configuration_is_rejected() {
    let result = StateMachine::<Document, Action>::create(None);
    assert_eq!(result.unwrap_err(), MachineError::MissingConfig);
}

#[test]
fn json_configuration_drives_machine() {
    let config: MachineConfig = serde_json::from_str(
        r#"{
            "initial": "solid",
            "states": {
                "solid":  { "transitions": { "melt": "liquid" } },
                "liquid": { "transitions": { "freeze": "solid", "vaporize": "gas" } },
                "gas":    { "transitions": { "condense": "liquid" } }
            }
        }"#,
    )
    .unwrap();
    let mut machine = StateMachine::create(Some(config)).unwrap();

    assert_eq!(machine.states(Some(&"freeze".to_string())), [&"liquid".to_string()]);

    machine.trigger(&"melt".to_string()).unwrap();
    machine.trigger(&"vaporize".to_string()).unwrap();
    assert_eq!(machine.state(), "gas");

    machine.clear_history();
    assert!(!machine.undo());
    assert_eq!(machine.state(), "gas");

    // Transitions keep working after the history is gone.
    machine.trigger(&"condense".to_string()).unwrap();
    assert_eq!(machine.state(), "liquid");
    assert_eq!(machine.history().entries(), ["liquid"]);
}

#[test]
fn hand_built_configuration() {
    let mut states = Table::new();
    states.insert(
        "idle".to_string(),
        state([("start".to_string(), "running".to_string())]),
    );
    states.insert(
        "running".to_string(),
        state([("stop".to_string(), "idle".to_string())]),
    );
    let mut machine = StateMachine::new(MachineConfig::new("idle".to_string(), states));

    machine.trigger(&"start".to_string()).unwrap();
    machine.change_state("idle".to_string()).unwrap();
    assert_eq!(machine.history().entries(), ["idle", "running", "idle"]);
}
