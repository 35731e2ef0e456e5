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

//! End-to-end tests of the `speedup` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn speedup_cmd() -> Command {
    let mut cmd = Command::cargo_bin("speedup").expect("Failed to find speedup binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture");
}

fn svg_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".svg"))
        .collect();
    names.sort();
    names
}

fn threads_inputs(dir: &Path) {
    write(
        dir,
        "resultados.csv",
        "Tamanho,Tempo_s,GFLOPS\n100,2.0\n100,2.0\n200,16.0\n",
    );
    write(
        dir,
        "resultados2.csv",
        "Tamanho,Threads,Tempo_s,GFLOPS\n100,4,0.5\n100,2,1.0\n200,4,4.0\n200,2,8.0\n",
    );
}

fn mpi_inputs(dir: &Path) {
    write(dir, "resultados_seq.csv", "Tamanho,Tempo_s\n256,8.0\n512,64.0\n");
    write(
        dir,
        "resultados_mpi.csv",
        "Tamanho,Processos,Tempo_s,Delta_Max\n256,2,4.0,0.0\n256,4,2.5,0.0\n512,2,32.0,0.0\n512,4,20.0,0.0\n",
    );
}

fn cuda_inputs(dir: &Path) {
    let header = "Tamanho,Metodo,Tempo_s,GFLOPS\n";
    for (idx, scale) in [1.0, 1.1, 0.9].iter().enumerate() {
        let rows = format!(
            "{header}512,Sequencial,{},0.33\n512,CUDA_Naive,{},40.0\n512,CUDA_Tiled,{},120.0\n\
             1024,Sequencial,{},0.30\n1024,CUDA_Naive,{},45.0\n1024,CUDA_Tiled,{},150.0\n",
            0.8 * scale,
            0.006 * scale,
            0.002 * scale,
            7.0 * scale,
            0.05 * scale,
            0.015 * scale,
        );
        write(dir, &format!("resultados_cuda{}.csv", idx + 1), &rows);
    }
}

// ===== Help =====

#[test]
fn test_help_lists_variants() {
    speedup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("threads"))
        .stdout(predicate::str::contains("mpi"))
        .stdout(predicate::str::contains("cuda"));
}

#[test]
fn test_no_subcommand_fails() {
    speedup_cmd().assert().failure();
}

// ===== Missing input =====

#[test]
fn test_missing_baseline_aborts_without_charts() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "resultados2.csv", "Tamanho,Threads,Tempo_s\n100,4,0.5\n");

    speedup_cmd()
        .current_dir(dir.path())
        .arg("threads")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("resultados.csv"))
        .stderr(predicate::str::contains("input directory"));

    assert!(svg_files(dir.path()).is_empty());
}

#[test]
fn test_missing_cuda_file_names_it() {
    let dir = TempDir::new().unwrap();
    cuda_inputs(dir.path());
    fs::remove_file(dir.path().join("resultados_cuda3.csv")).unwrap();

    speedup_cmd()
        .args(["cuda", "--input-dir"])
        .arg(dir.path())
        .args(["--output-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("resultados_cuda3.csv"));

    assert!(svg_files(dir.path()).is_empty());
}

// ===== Full runs =====

#[test]
fn test_threads_run() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    threads_inputs(input.path());

    speedup_cmd()
        .arg("threads")
        .arg("--input-dir")
        .arg(input.path())
        .arg("--output-dir")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Speedup_2"))
        .stdout(predicate::str::contains("Speedup_4"))
        .stdout(predicate::str::contains("4.00"))
        .stdout(predicate::str::contains("grafico_speedup.svg"));

    assert_eq!(
        svg_files(output.path()),
        vec!["grafico_speedup.svg", "grafico_tempo_execucao.svg"]
    );
}

#[test]
fn test_mpi_run_draws_efficiency() {
    let dir = TempDir::new().unwrap();
    mpi_inputs(dir.path());

    speedup_cmd()
        .current_dir(dir.path())
        .arg("mpi")
        .assert()
        .success()
        .stdout(predicate::str::contains("Efficiency_4"))
        .stdout(predicate::str::contains("0.800"));

    assert_eq!(
        svg_files(dir.path()),
        vec![
            "grafico_eficiencia_mpi.svg",
            "grafico_speedup_mpi.svg",
            "grafico_tempo_execucao_mpi.svg",
        ]
    );
}

#[test]
fn test_cuda_run_annotates_peak() {
    let dir = TempDir::new().unwrap();
    cuda_inputs(dir.path());

    speedup_cmd()
        .current_dir(dir.path())
        .args(["cuda", "--width", "800", "--height", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CUDA_Tiled"))
        .stdout(predicate::str::contains("MEAN GFLOPS"));

    assert_eq!(svg_files(dir.path()).len(), 4);
    let scalability = fs::read_to_string(dir.path().join("grafico_escalabilidade_cuda.svg")).unwrap();
    assert!(scalability.contains("Pico GPU: 150.0 GFLOPS"));
}

// ===== Options =====

#[test]
fn test_no_charts_with_json_report() {
    let dir = TempDir::new().unwrap();
    threads_inputs(dir.path());
    let report = dir.path().join("report.json");

    speedup_cmd()
        .current_dir(dir.path())
        .args(["threads", "--no-charts", "--json"])
        .arg(&report)
        .assert()
        .success();

    assert!(svg_files(dir.path()).is_empty());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["variant"], "threads");
    assert_eq!(value["time"]["columns"][0], "Sequencial");
    assert_eq!(value["files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    threads_inputs(dir.path());

    speedup_cmd()
        .current_dir(dir.path())
        .args(["-v", "threads", "--no-charts"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded trial file"));
}

// ===== Malformed input =====

#[test]
fn test_non_numeric_time_reports_line() {
    let dir = TempDir::new().unwrap();
    threads_inputs(dir.path());
    write(dir.path(), "resultados2.csv", "Tamanho,Threads,Tempo_s\n100,4,fast\n");

    speedup_cmd()
        .current_dir(dir.path())
        .arg("threads")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tempo_s"))
        .stderr(predicate::str::contains("fast"));

    assert!(svg_files(dir.path()).is_empty());
}

#[test]
fn test_missing_column_is_reported() {
    let dir = TempDir::new().unwrap();
    threads_inputs(dir.path());
    write(dir.path(), "resultados2.csv", "Tamanho,Tempo_s\n100,0.5\n");

    speedup_cmd()
        .current_dir(dir.path())
        .arg("threads")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Threads"));
}
