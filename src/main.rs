//! Lift controller firmware: main entry point.
//!
//! Hexagonal architecture with core-pinned tasks.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  Hoist (LiftDrive)   DoorHardware (DoorDrive)                  │
//! │  FloorLamps (FloorIndicator)   ConsoleDisplay (StatusDisplay)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              LiftController                            │    │
//! │  │  Ingestor · Dispatcher (SCAN) · Actuator · Door        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Button ISRs (stdin keys on the host) ──▶ RequestChannel       │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::{error, info, warn};

use liftctl::adapters::console::ConsoleDisplay;
use liftctl::adapters::hardware::{DoorHardware, Hoist};
use liftctl::app::service::LiftController;
use liftctl::config::ElevatorConfig;
use liftctl::drivers::buzzer::Buzzer;
use liftctl::drivers::door_servo::DoorServo;
use liftctl::drivers::floor_lamps::FloorLamps;
use liftctl::drivers::hw_init;
use liftctl::drivers::stepper::StepperDriver;
use liftctl::events::REQUESTS;
use liftctl::pins;

/// Period of the console heartbeat.
const STATUS_PERIOD: std::time::Duration = std::time::Duration::from_secs(10);

fn main() -> Result<()> {
    // ── 1. Bootstrap + logging ────────────────────────────────
    init_logging()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  liftctl v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().context("peripheral init")?;

    // ── 3. Configuration ──────────────────────────────────────
    let config = load_config();
    config
        .fits_board(pins::FLOOR_LAMP_GPIOS.len())
        .context("config does not fit the board")?;

    // ── 4. Adapters + controller ──────────────────────────────
    let hoist = Hoist::new(StepperDriver::new(
        config.steps_per_floor,
        config.step_half_period_us,
    ));
    let door = DoorHardware::new(DoorServo::new(), Buzzer::new());
    let controller = LiftController::new(config, hoist, door)?;

    // Door starts shut regardless of where the servo was left.
    futures_lite::future::block_on(controller.door().reset());

    // ── 5. Event sources ──────────────────────────────────────
    if let Err(e) = hw_init::init_isr_service() {
        error!("ISR service init failed: {}; continuing without buttons", e);
    }
    #[cfg(not(target_os = "espidf"))]
    spawn_key_reader()?;

    // ── 6. Tasks ──────────────────────────────────────────────
    let _tasks = controller.spawn(&REQUESTS, ConsoleDisplay::new(), FloorLamps::new());
    info!("System ready.");

    // ── 7. Heartbeat ──────────────────────────────────────────
    loop {
        std::thread::sleep(STATUS_PERIOD);
        match serde_json::to_string(&controller.snapshot()) {
            Ok(json) => info!(
                "STATUS | {} | pending={} queued={} dropped={}",
                json,
                controller.store().pending_count(),
                REQUESTS.len(),
                REQUESTS.dropped(),
            ),
            Err(e) => warn!("STATUS | snapshot encode failed: {}", e),
        }
    }
}

#[cfg(target_os = "espidf")]
fn init_logging() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_logging() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Ok(())
}

/// Defaults on the board.  On the host an optional JSON document in
/// `LIFTCTL_CONFIG` overrides them; a bad document falls back to defaults.
#[cfg(target_os = "espidf")]
fn load_config() -> ElevatorConfig {
    ElevatorConfig::default()
}

#[cfg(not(target_os = "espidf"))]
fn load_config() -> ElevatorConfig {
    let Ok(json) = std::env::var("LIFTCTL_CONFIG") else {
        return ElevatorConfig::default();
    };
    match ElevatorConfig::from_json(&json) {
        Ok(cfg) => {
            info!("Config loaded from LIFTCTL_CONFIG");
            cfg
        }
        Err(e) => {
            warn!("LIFTCTL_CONFIG rejected ({}), using defaults", e);
            ElevatorConfig::default()
        }
    }
}

/// Host stand-in for the button ISRs: every key on a stdin line is one
/// button edge.
#[cfg(not(target_os = "espidf"))]
fn spawn_key_reader() -> Result<()> {
    use liftctl::drivers::button::{ButtonId, button_isr_handler};
    use std::io::BufRead;

    info!("Keys: 1-3 cabin, u/d floor-2 hall up/down, o/c door open/close (then Enter)");
    std::thread::Builder::new()
        .name("keys".into())
        .spawn(|| {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                for id in line.chars().filter_map(ButtonId::from_key) {
                    if !button_isr_handler(id, hw_init::now_ms(), &REQUESTS) {
                        warn!("{:?} ignored (bounce or queue full)", id);
                    }
                }
            }
        })
        .context("key reader spawn")?;
    Ok(())
}
