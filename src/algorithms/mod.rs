// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in algorithm units.
//!
//! Each unit implements [`Algorithm`](crate::traits::Algorithm) and is
//! stateless, so the pipeline creates one instance per stage worker and feeds
//! every job through it.
//!
//! | Wire name   | Unit                   | Result line(s)                                   |
//! |-------------|------------------------|--------------------------------------------------|
//! | `EULER`     | [`EulerAlgorithm`]     | `OK <v0> ... <v0>` / `ERR NO_EULERIAN_CYCLE`     |
//! | `MST`       | [`MstAlgorithm`]       | `OK MST WEIGHT: <w>`                             |
//! | `MAXFLOW`   | [`MaxFlowAlgorithm`]   | `OK MAXFLOW <f>`                                 |
//! | `HAMILTON`  | [`HamiltonAlgorithm`]  | `OK <v0> ... <v0>` / `ERR NO HAMILTONIAN CYCLE`  |
//! | `MAXCLIQUE` | [`MaxCliqueAlgorithm`] | `OK MAX CLIQUE SIZE: <k>` + `CLIQUE MEMBERS: ..` |
//! | `SCC`       | [`SccAlgorithm`]       | `OK <k> COMPONENTS` + one `COMP <i>: ..` per SCC |

pub mod euler;
pub mod factory;
pub mod hamilton;
pub mod max_clique;
pub mod max_flow;
pub mod mst;
pub mod scc;

pub use euler::EulerAlgorithm;
pub use factory::{AlgorithmFactory, AlgorithmKind};
pub use hamilton::HamiltonAlgorithm;
pub use max_clique::MaxCliqueAlgorithm;
pub use max_flow::MaxFlowAlgorithm;
pub use mst::MstAlgorithm;
pub use scc::SccAlgorithm;
