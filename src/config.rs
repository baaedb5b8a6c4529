//! Machine description loading.
//!
//! A machine file is JSON:
//!
//! ```json
//! {
//!   "machine": {
//!     "outlets": { "count_n": 3 },
//!     "total_items_quantity": { "hot_water": 500, "hot_milk": 500 },
//!     "beverages": {
//!       "hot_tea": { "hot_water": 200, "hot_milk": 100 }
//!     }
//!   }
//! }
//! ```
//!
//! Beverages and their ingredients are kept sorted by name, so a given file
//! always yields the same batch in the same order.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dispenser::DispenserConfig;
use crate::domain::{Beverage, Ingredient};

/// Environment variable consulted when no machine file is passed on the command line.
pub const MACHINE_FILE_ENV: &str = "DISPENSER_MACHINE_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no machine file given; pass a path or set DISPENSER_MACHINE_FILE")]
    MissingMachineFile,

    #[error("failed to read machine file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid machine description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("machine must have at least one outlet")]
    NoOutlets,
}

#[derive(Debug, Deserialize)]
struct MachineFile {
    machine: MachineConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Outlets {
    count_n: usize,
}

/// A dispenser's outlet count, starting stock and beverage menu.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    outlets: Outlets,
    #[serde(rename = "total_items_quantity")]
    stock: BTreeMap<String, u32>,
    beverages: BTreeMap<String, BTreeMap<String, u32>>,
}

impl MachineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: MachineFile = serde_json::from_str(json)?;
        if file.machine.outlets.count_n == 0 {
            return Err(ConfigError::NoOutlets);
        }
        Ok(file.machine)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolves the machine file from an explicit argument, else from
    /// [`MACHINE_FILE_ENV`].
    pub fn locate(arg: Option<String>) -> Result<PathBuf, ConfigError> {
        arg.or_else(|| env::var(MACHINE_FILE_ENV).ok())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingMachineFile)
    }

    pub fn outlets(&self) -> usize {
        self.outlets.count_n
    }

    /// Starting stock, one entry per ingredient.
    pub fn stock(&self) -> Vec<Ingredient> {
        self.stock
            .iter()
            .map(|(id, quantity)| Ingredient::new(id.clone(), *quantity))
            .collect()
    }

    /// The menu as a batch: one order per beverage.
    pub fn beverages(&self) -> Vec<Beverage> {
        self.beverages
            .iter()
            .map(|(name, recipe)| Beverage::from_pairs(name.clone(), recipe.iter().map(|(id, q)| (id.clone(), *q))))
            .collect()
    }

    pub fn dispenser_config(&self) -> DispenserConfig {
        DispenserConfig::new(self.outlets())
    }
}
