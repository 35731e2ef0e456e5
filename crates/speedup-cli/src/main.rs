// Dweve Speedup - Parallel Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Speedup Command Line Interface

use clap::Parser;
use speedup_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_TARGETS: &[&str] = &["speedup_cli", "speedup_core", "speedup_csv", "speedup_plot"];

/// Speedup - parallel benchmark analysis
///
/// Averages repeated benchmark trials, compares them against the sequential
/// baseline and draws time, speedup, efficiency and GFLOPS charts.
///
/// # Examples
///
/// ```bash
/// # Threads benchmark in the current directory
/// speedup threads
///
/// # MPI benchmark, charts into a separate directory
/// speedup mpi --input-dir results --output-dir charts
///
/// # CUDA tables only, with a JSON report
/// speedup cuda --no-charts --json cuda.json
/// ```
#[derive(Parser)]
#[command(name = "speedup")]
#[command(author, version, about = "Speedup - parallel benchmark analysis", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",");

    // RUST_LOG overrides -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
