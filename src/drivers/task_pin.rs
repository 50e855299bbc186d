//! Core-pinned task spawning for the ESP32-S3.
//!
//! Every controller task is a `std::thread` (a FreeRTOS task underneath)
//! with a fixed core, priority and stack.  `esp_pthread_set_cfg()` applies
//! to the *next* `pthread_create()` from the calling thread, so the
//! config→spawn pair must not be interleaved with other thread creation.
//!
//! | Task         | Core | Priority |
//! |--------------|------|----------|
//! | dispatcher   | App  | 3        |
//! | ingestor     | App  | 2        |
//! | door         | App  | 2        |
//! | presentation | Pro  | 1        |

use std::thread::JoinHandle;

/// CPU core identifiers for the ESP32-S3 Xtensa LX7 dual-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 0 (PRO_CPU): display and lamp refresh.
    Pro = 0,
    /// Core 1 (APP_CPU): dispatch, motion, door.
    App = 1,
}

/// Placement of one task.  `name` must be NUL-terminated.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    pub name: &'static str,
    pub core: Core,
    pub priority: u8,
    pub stack_kb: usize,
}

impl TaskSpec {
    fn display_name(&self) -> &'static str {
        self.name.trim_end_matches('\0')
    }
}

pub const DISPATCHER: TaskSpec = TaskSpec {
    name: "dispatch\0",
    core: Core::App,
    priority: 3,
    stack_kb: 8,
};

pub const INGESTOR: TaskSpec = TaskSpec {
    name: "ingest\0",
    core: Core::App,
    priority: 2,
    stack_kb: 4,
};

pub const DOOR: TaskSpec = TaskSpec {
    name: "door\0",
    core: Core::App,
    priority: 2,
    stack_kb: 4,
};

pub const PRESENTATION: TaskSpec = TaskSpec {
    name: "present\0",
    core: Core::Pro,
    priority: 1,
    stack_kb: 4,
};

/// Spawn `f` on its own task placed per `spec`.
#[cfg(target_os = "espidf")]
pub fn spawn_on_core(spec: &TaskSpec, f: impl FnOnce() + Send + 'static) -> JoinHandle<()> {
    unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = spec.core as i32;
        cfg.prio = spec.priority as i32;
        cfg.stack_size = (spec.stack_kb * 1024) as i32;
        cfg.thread_name = spec.name.as_ptr() as *const _;
        let ret = esp_idf_sys::esp_pthread_set_cfg(&cfg);
        assert!(
            ret == esp_idf_sys::ESP_OK as i32,
            "esp_pthread_set_cfg failed: {ret}"
        );
    }

    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        spec.display_name(),
        spec.core,
        spec.priority,
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(spec.display_name().into())
        .spawn(f)
        .expect("spawn_on_core: thread creation failed")
}

/// Simulation fallback: plain thread, no core affinity or priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_on_core(spec: &TaskSpec, f: impl FnOnce() + Send + 'static) -> JoinHandle<()> {
    log::info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        spec.display_name(),
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(spec.display_name().into())
        .stack_size(spec.stack_kb * 1024)
        .spawn(f)
        .expect("spawn_on_core(sim): thread creation failed")
}
