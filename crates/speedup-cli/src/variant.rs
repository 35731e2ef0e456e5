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

//! Benchmark variant presets.
//!
//! File names, column names and chart labels are fixed per variant; they are
//! the contract shared with the benchmark programs that write the CSV files.
//! Chart text stays in the producers' language.

use speedup_csv::{METHOD_COLUMN, PROCESSES_COLUMN, THREADS_COLUMN};

/// Label of the sequential baseline column.
pub const BASELINE_LABEL: &str = "Sequencial";

/// X axis description for matrix sizes.
pub const SIZE_AXIS: &str = "Tamanho da Matriz (n x n)";

/// Variants that compare a baseline file against a file keyed by a unit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingSpec {
    /// Baseline trials, no configuration column.
    pub baseline_file: &'static str,
    /// Parallel trials.
    pub parallel_file: &'static str,
    /// Unit count column in the parallel file.
    pub unit_column: &'static str,
    /// Unit noun used in series labels, e.g. `4 Threads`.
    pub unit_noun: &'static str,
    /// X axis description for unit counts.
    pub unit_axis: &'static str,
    /// Time bar chart output and title.
    pub time_chart: (&'static str, &'static str),
    /// Speedup line chart output and title.
    pub speedup_chart: (&'static str, &'static str),
    /// Efficiency line chart output and title, when the variant draws one.
    pub efficiency_chart: Option<(&'static str, &'static str)>,
}

/// Variants whose configurations are named methods in shared files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Input files, concatenated in order.
    pub files: &'static [&'static str],
    /// Method column.
    pub method_column: &'static str,
    /// Column order for tables and charts.
    pub method_order: &'static [&'static str],
    /// Method whose peak throughput is annotated.
    pub peak_method: &'static str,
    /// Speedup legend labels by method; unlisted methods use their name.
    pub speedup_labels: &'static [(&'static str, &'static str)],
    /// Time bar chart output and title.
    pub time_chart: (&'static str, &'static str),
    /// Speedup line chart output and title.
    pub speedup_chart: (&'static str, &'static str),
    /// Throughput line chart output and title.
    pub scalability_chart: (&'static str, &'static str),
    /// Throughput bar chart output and title.
    pub throughput_chart: (&'static str, &'static str),
}

impl MethodSpec {
    /// Legend label of `method` on the speedup chart.
    pub fn speedup_label(&self, method: &str) -> String {
        self.speedup_labels
            .iter()
            .find(|(name, _)| *name == method)
            .map_or_else(|| method.to_string(), |(_, label)| label.to_string())
    }
}

/// Input layout and chart labels for a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSpec {
    /// Threads or MPI processes against a sequential baseline.
    Scaling {
        /// Variant name.
        name: &'static str,
        /// Layout and labels.
        spec: ScalingSpec,
    },
    /// CPU and GPU methods in the same files.
    Methods {
        /// Variant name.
        name: &'static str,
        /// Layout and labels.
        spec: MethodSpec,
    },
}

impl VariantSpec {
    /// Shared-memory threads: `resultados.csv` against `resultados2.csv`.
    pub fn threads() -> Self {
        VariantSpec::Scaling {
            name: "threads",
            spec: ScalingSpec {
                baseline_file: "resultados.csv",
                parallel_file: "resultados2.csv",
                unit_column: THREADS_COLUMN,
                unit_noun: "Threads",
                unit_axis: "Número de Threads",
                time_chart: (
                    "grafico_tempo_execucao.svg",
                    "Comparação de Tempo de Execução (Sequencial vs. Paralelo)",
                ),
                speedup_chart: (
                    "grafico_speedup.svg",
                    "Escalabilidade e Speedup do Código Paralelo",
                ),
                efficiency_chart: None,
            },
        }
    }

    /// MPI processes: `resultados_seq.csv` against `resultados_mpi.csv`.
    pub fn mpi() -> Self {
        VariantSpec::Scaling {
            name: "mpi",
            spec: ScalingSpec {
                baseline_file: "resultados_seq.csv",
                parallel_file: "resultados_mpi.csv",
                unit_column: PROCESSES_COLUMN,
                unit_noun: "Processos",
                unit_axis: "Número de Processos (MPI)",
                time_chart: (
                    "grafico_tempo_execucao_mpi.svg",
                    "Comparação de Tempo de Execução (Sequencial vs. MPI)",
                ),
                speedup_chart: (
                    "grafico_speedup_mpi.svg",
                    "Escalabilidade e Speedup do Código MPI",
                ),
                efficiency_chart: Some((
                    "grafico_eficiencia_mpi.svg",
                    "Eficiência Paralela do Código MPI",
                )),
            },
        }
    }

    /// CUDA kernels: three repetitions of sequential, naive and tiled runs.
    pub fn cuda() -> Self {
        VariantSpec::Methods {
            name: "cuda",
            spec: MethodSpec {
                files: &[
                    "resultados_cuda1.csv",
                    "resultados_cuda2.csv",
                    "resultados_cuda3.csv",
                ],
                method_column: METHOD_COLUMN,
                method_order: &[BASELINE_LABEL, "CUDA_Naive", "CUDA_Tiled"],
                peak_method: "CUDA_Tiled",
                speedup_labels: &[
                    ("CUDA_Naive", "GPU Naive"),
                    ("CUDA_Tiled", "GPU Tiled (Shared Mem)"),
                ],
                time_chart: (
                    "grafico_tempo_cuda.svg",
                    "Comparação de Tempo: CPU Sequencial vs GPU CUDA",
                ),
                speedup_chart: (
                    "grafico_speedup_cuda.svg",
                    "Speedup: Ganho de Desempenho em relação à CPU",
                ),
                scalability_chart: (
                    "grafico_escalabilidade_cuda.svg",
                    "Escalabilidade de Desempenho (GFLOPS x Tamanho da Matriz)",
                ),
                throughput_chart: (
                    "grafico_eficiencia_cuda.svg",
                    "Eficiência Computacional (GFLOPS)",
                ),
            },
        }
    }

    /// Returns the variant name.
    pub fn name(&self) -> &'static str {
        match self {
            VariantSpec::Scaling { name, .. } | VariantSpec::Methods { name, .. } => name,
        }
    }
}
