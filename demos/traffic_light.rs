//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine driven by events.
//!
//! Key concepts:
//! - Typed states and events via `state_enum!` / `event_enum!`
//! - Event-driven transitions with `trigger`
//! - Rejected events leave the machine untouched
//!
//! Run with: cargo run --example traffic_light

use rewind::builder::StateMachineBuilder;
use rewind::core::State;
use rewind::{event_enum, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

event_enum! {
    enum Signal {
        Timer,
        Emergency,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachineBuilder::new()
        .initial(TrafficLight::Red)
        .transition(TrafficLight::Red, Signal::Timer, TrafficLight::Green)
        .transition(TrafficLight::Green, Signal::Timer, TrafficLight::Yellow)
        .transition(TrafficLight::Green, Signal::Emergency, TrafficLight::Red)
        .transition(TrafficLight::Yellow, Signal::Timer, TrafficLight::Red)
        .build()
        .unwrap();

    println!("Initial state: {}\n", machine.state().name());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = machine.state().name().to_string();
        machine.trigger(&Signal::Timer).unwrap();
        println!("  {from} -> {}", machine.state().name());
    }

    println!("\nStates reacting to an emergency:");
    for state in machine.states(Some(&Signal::Emergency)) {
        println!("  {}", state.name());
    }

    match machine.trigger(&Signal::Emergency) {
        Ok(()) => println!("\nEmergency handled, now {}", machine.state().name()),
        Err(error) => println!("\nRejected: {error}"),
    }

    println!("\n=== Example Complete ===");
}
