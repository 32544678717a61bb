//! native-probe Binary Entry Point
//!
//! Small diagnostic tool around the native loader:
//! - `platform`: print the OS identifier, family queries and data model
//! - `load`: load one library by path or by directory and logical name
//! - `engine`: run the load plan of an audio engine
//!
//! Exit status: 0 on success, 1 when a library cannot be linked, 2 on
//! configuration errors.
//!
//! No `tracing` subscriber is installed, so the `tracing` events of the
//! loader crates are not shown. Everything they report (platform, loaded
//! files, skipped dependency stages and their causes) is printed here from
//! the returned values instead.

use std::process;

use clap::Parser;
use frameworks_native_init::args::{ProbeArgs, ProbeCommand};
use frameworks_native_init::{error_chain, NativeConfig, NativeRuntime};

const EXIT_LINK_FAILURE: i32 = 1;
const EXIT_CONFIG_ERROR: i32 = 2;

fn main() {
    let args = ProbeArgs::parse();

    let mut config = match NativeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", error_chain(&e));
            process::exit(EXIT_CONFIG_ERROR);
        }
    };
    if let Err(e) = args.apply_overrides(&mut config) {
        eprintln!("Configuration error: {}", error_chain(&e));
        process::exit(EXIT_CONFIG_ERROR);
    }

    let runtime = NativeRuntime::system(config);

    let result = match &args.command {
        ProbeCommand::Platform { name } => {
            let probe = runtime.probe();
            println!("os name:    {}", probe.os_name());
            println!("windows:    {}", probe.is_windows());
            println!("mac:        {}", probe.is_mac());
            println!("linux:      {}", probe.is_linux());
            println!("family:     {}", probe.family());
            println!("data model: {}", runtime.config().data_model);
            if let Some(name) = name {
                println!("{} -> {}", name, runtime.loader().naming().map_library_name(name));
            }
            Ok(())
        }
        ProbeCommand::Load { path: Some(path), .. } => {
            runtime.loader().load_by_path(path).map(|()| {
                println!("loaded {}", path.display());
            })
        }
        ProbeCommand::Load {
            dir: Some(dir),
            name: Some(name),
            ..
        } => runtime.loader().load_by_name(dir, name).map(|()| {
            println!("loaded {}", runtime.loader().resolve_library_file(dir, name).display());
        }),
        ProbeCommand::Load { .. } => {
            // clap rejects this combination
            eprintln!("load needs --path or --dir with --name");
            process::exit(EXIT_CONFIG_ERROR);
        }
        ProbeCommand::Engine { engine, .. } => {
            let platform = runtime.platform();
            println!(
                "running on {} {}bit system",
                platform.family,
                platform.data_model.bits()
            );
            runtime.load_engine(*engine).map(|report| {
                for file in &report.loaded {
                    println!("loaded {}", file.display());
                }
                for skipped in &report.skipped {
                    println!(
                        "skipped {} ({} not attempted): {}",
                        skipped.stage,
                        skipped.not_attempted.len(),
                        error_chain(&skipped.error)
                    );
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Native library error: {}", error_chain(&e));
        process::exit(EXIT_LINK_FAILURE);
    }
}
