pub mod tasks;

use cu29::prelude::*;
use cu29_helpers::basic_copper_setup;
use std::path::{Path, PathBuf};

const PREALLOCATED_STORAGE_SIZE: Option<usize> = Some(1024 * 1024 * 10);

/// Three full laps of the scripted haul.
const ITERATIONS: usize = tasks::HAUL_CYCLE.len() * 3;

#[copper_runtime(config = "copperconfig.ron")]
struct HaulApplication {}

fn main() {
    let logger_path = "logs/adt-haul.copper";
    if let Some(parent) = Path::new(logger_path).parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).expect("Failed to create logs directory");
        }
    }
    let copper_ctx = basic_copper_setup(
        &PathBuf::from(&logger_path),
        PREALLOCATED_STORAGE_SIZE,
        true,
        None,
    )
    .expect("Failed to setup logger.");
    debug!("Logger created at {}.", logger_path);

    let mut application = HaulApplicationBuilder::new()
        .with_context(&copper_ctx)
        .build()
        .expect("Failed to create application.");
    let clock = copper_ctx.clock.clone();
    debug!("Running {} iterations... starting clock: {}.", ITERATIONS, clock.now());

    application
        .start_all_tasks()
        .expect("Failed to start tasks.");
    for _ in 0..ITERATIONS {
        application
            .run_one_iteration()
            .expect("Failed to run the haul cycle.");
    }
    application.stop_all_tasks().expect("Failed to stop tasks.");
    debug!("End of program: {}.", clock.now());
}
