// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Assembly configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{InvalidItemPolicy, PageGeometry};

/// Settings supplied by the embedding application for one assembly run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Page canvas for pages generated from images.
    pub page: PageGeometry,
    /// Policy for items whose dimensions fail layout.
    pub on_invalid_item: InvalidItemPolicy,
    /// Title embedded in the generated pages' document info.
    pub title: Option<String>,
}

impl AssemblyConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::a4(),
            on_invalid_item: InvalidItemPolicy::Abort,
            title: None,
        }
    }
}
