//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements      | Connects to                  |
//! |------------|-----------------|------------------------------|
//! | `hardware` | LiftDrive       | Stepper on STEP/DIR GPIOs    |
//! |            | DoorDrive       | Door servo (LEDC) + buzzer   |
//! |            | FloorIndicator  | Floor lamp GPIOs             |
//! | `console`  | StatusDisplay   | Serial log output            |

pub mod console;
pub mod hardware;
