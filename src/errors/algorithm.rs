// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A request or stage named an algorithm nobody registered.
///
/// `Display` is the wire line a stage appends in place of a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ERR UNKNOWN ALGORITHM {0}")]
pub struct UnknownAlgorithm(pub String);
