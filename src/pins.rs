//! GPIO / peripheral pin assignments for the three-floor lift board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Hoist stepper (STEP/DIR driver, e.g. A4988)
// ---------------------------------------------------------------------------

/// Step pulse output.
pub const STEPPER_STEP_GPIO: i32 = 5;
/// Direction output: HIGH = up, LOW = down.
pub const STEPPER_DIR_GPIO: i32 = 4;
/// Driver enable output (active LOW).
pub const STEPPER_ENABLE_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Door servo (hobby servo, 50 Hz PWM)
// ---------------------------------------------------------------------------

pub const DOOR_SERVO_GPIO: i32 = 19;
/// Servo frame rate.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// Servo angle with the door shut.
pub const DOOR_CLOSED_DEG: u8 = 0;
/// Servo angle with the door fully open.
pub const DOOR_OPEN_DEG: u8 = 90;

// ---------------------------------------------------------------------------
// Arrival buzzer (passive piezo, LEDC tone)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 21;
/// Chime pitch.
pub const BUZZER_TONE_HZ: u32 = 2_000;

// ---------------------------------------------------------------------------
// Push buttons (active-low, internal pull-up, falling-edge interrupt)
// ---------------------------------------------------------------------------

/// Cabin buttons for floors 1–3.
pub const CABIN_1_GPIO: i32 = 10;
pub const CABIN_2_GPIO: i32 = 3;
pub const CABIN_3_GPIO: i32 = 46;
/// Hall call buttons on floor 2.
pub const HALL_2_UP_GPIO: i32 = 12;
pub const HALL_2_DOWN_GPIO: i32 = 11;
/// Manual door buttons in the cabin.
pub const DOOR_OPEN_GPIO: i32 = 15;
pub const DOOR_CLOSE_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Floor indicator lamps (one per floor, active HIGH)
// ---------------------------------------------------------------------------

pub const FLOOR_LAMP_GPIOS: [i32; 3] = [16, 17, 18];
