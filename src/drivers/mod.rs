//! Actuator drivers, push buttons, hardware initialisation, and task
//! placement helpers.

pub mod button;
pub mod buzzer;
pub mod door_servo;
pub mod floor_lamps;
pub mod hw_init;
pub mod stepper;
pub mod task_pin;
