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

//! Integration tests for loading trial files from disk.

use speedup_core::{ConfigKey, ConfigKind};
use speedup_csv::{load, LoadError, TrialSchema, METHOD_COLUMN};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn method_schema() -> TrialSchema {
    TrialSchema::default().with_config(METHOD_COLUMN, ConfigKind::Method)
}

#[test]
fn test_concatenates_files_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write(
        &dir,
        "resultados_cuda1.csv",
        "Tamanho,Metodo,Tempo_s,GFLOPS\n512,Sequencial,1.2,0.22\n512,CUDA_Naive,0.01,26.8\n",
    );
    let b = write(
        &dir,
        "resultados_cuda2.csv",
        "Tamanho,Metodo,Tempo_s,GFLOPS\n512,Sequencial,1.4,0.19\n",
    );

    let loaded = load(&[&a, &b], &method_schema()).unwrap();

    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.files.len(), 2);
    assert_eq!(loaded.files[0].rows, 2);
    assert_eq!(loaded.files[1].rows, 1);
    assert_eq!(loaded.files[1].path, b);
    assert_eq!(loaded.trials[2].time_s, 1.4);
    assert_eq!(loaded.trials[1].config, Some(ConfigKey::method("CUDA_Naive")));
}

#[test]
fn test_missing_file_names_path_and_reads_nothing() {
    let dir = TempDir::new().unwrap();
    let present = write(&dir, "resultados_cuda1.csv", "Tamanho,Metodo,Tempo_s\n");
    let missing = dir.path().join("resultados_cuda2.csv");

    let err = load(&[&present, &missing], &method_schema()).unwrap_err();

    match &err {
        LoadError::MissingInput { path } => assert_eq!(path, &missing),
        other => panic!("Expected MissingInput, got {:?}", other),
    }
    assert!(err.to_string().contains("resultados_cuda2.csv"));
}

#[test]
fn test_missing_file_reported_before_bad_content() {
    let dir = TempDir::new().unwrap();
    let broken = write(&dir, "broken.csv", "Tamanho,Tempo_s\nnot,numbers\n");
    let missing = dir.path().join("resultados.csv");

    let err = load(&[&broken, &missing], &TrialSchema::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingInput { .. }));
}

#[test]
fn test_header_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "resultados.csv", "Tamanho,Tempo_s,GFLOPS\n");
    let loaded = load(&[&path], &TrialSchema::default()).unwrap();
    assert!(loaded.is_empty());
    assert_eq!(loaded.files[0].rows, 0);
}

#[test]
fn test_error_mentions_file_name() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "resultados2.csv", "Tamanho,Tempo_s\n100,1.0\n");
    let schema = TrialSchema::default().with_config("Threads", ConfigKind::Units);

    let err = load(&[&path], &schema).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("resultados2.csv"));
    assert!(message.contains("Threads"));
}
