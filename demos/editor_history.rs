//! Editor History
//!
//! This example walks through undo/redo on a string-keyed machine loaded
//! from JSON, including how a new move after an undo drops the redo branch.
//!
//! Run with: cargo run --example editor_history

use rewind::{MachineConfig, StateMachine};

const CONFIG: &str = r#"{
    "initial": "empty",
    "states": {
        "empty":    { "transitions": { "type": "editing" } },
        "editing":  { "transitions": { "save": "saved", "clear": "empty" } },
        "saved":    { "transitions": { "type": "editing", "publish": "published" } },
        "published": {}
    }
}"#;

fn show(machine: &StateMachine) {
    let history = machine.history();
    println!(
        "  state={:<10} history={:?} cursor={}",
        machine.state(),
        history.entries(),
        history.cursor()
    );
}

fn main() {
    println!("=== Editor History ===\n");

    let config: MachineConfig = serde_json::from_str(CONFIG).unwrap();
    let mut machine = StateMachine::new(config);
    show(&machine);

    for event in ["type", "save", "publish"] {
        machine.trigger(&event.to_string()).unwrap();
        println!("trigger({event})");
        show(&machine);
    }

    println!("undo() -> {}", machine.undo());
    show(&machine);
    println!("undo() -> {}", machine.undo());
    show(&machine);
    println!("redo() -> {}", machine.redo());
    show(&machine);

    println!("trigger(type)  (drops the redo branch)");
    machine.trigger(&"type".to_string()).unwrap();
    show(&machine);
    println!("redo() -> {}", machine.redo());

    println!("reset()  (history untouched)");
    machine.reset();
    show(&machine);

    println!("clear_history()");
    machine.clear_history();
    show(&machine);
    println!("undo() -> {}", machine.undo());

    println!("\n=== Example Complete ===");
}
