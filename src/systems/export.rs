// saves the current design as a flat json document and loads it back
// also loads the regional rate table

use std::fs;
use std::io;
use std::path::Path;

use bevy::prelude::*;
use thiserror::Error;

use crate::systems::house::generator::estimate::RateTable;
use crate::systems::house::generator::massing::normalize;
use crate::systems::house::generator::params::DesignParameters;
use crate::systems::house::{CurrentDesign, RegenerateEvent};

pub const RATES_FILE: &str = "rates.json";

#[derive(Debug, Error)]
pub enum DesignIoError {
    #[error("could not access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed design json: {0}")]
    Json(#[from] serde_json::Error),
}

impl DesignIoError {
    fn io(path: &Path, source: io::Error) -> Self {
        DesignIoError::Io { path: path.display().to_string(), source }
    }
}

// export event
#[derive(Event)]
pub struct ExportEvent {
    pub filename: String,
}

#[derive(Event)]
pub struct ImportEvent {
    pub path: String,
}

pub fn to_json(params: &DesignParameters) -> Result<String, DesignIoError> {
    Ok(serde_json::to_string_pretty(params)?)
}

/// Parses an exported design. The result is normalised, a hand edited file can not
/// smuggle a wing onto a rectangular footprint.
pub fn from_json(json: &str) -> Result<DesignParameters, DesignIoError> {
    let params: DesignParameters = serde_json::from_str(json)?;
    Ok(normalize(params))
}

pub fn save_design(path: impl AsRef<Path>, params: &DesignParameters) -> Result<(), DesignIoError> {
    let path = path.as_ref();
    fs::write(path, to_json(params)?).map_err(|e| DesignIoError::io(path, e))
}

pub fn load_design(path: impl AsRef<Path>) -> Result<DesignParameters, DesignIoError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| DesignIoError::io(path, e))?;
    from_json(&json)
}

/// `Ok(None)` when there is no rate file, the built in table applies.
pub fn load_rates(path: impl AsRef<Path>) -> Result<Option<RateTable>, DesignIoError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DesignIoError::io(path, e)),
    }
}

pub fn export_filename(timestamp: u64) -> String {
    format!("house_design_{}.json", timestamp)
}

// handle export events
pub fn handle_export(
    mut events: EventReader<ExportEvent>,
    design: Res<CurrentDesign>,
) {
    for event in events.read() {
        match save_design(&event.filename, &design.0) {
            Ok(()) => info!("exported design to {}", event.filename),
            Err(e) => error!("export failed: {}", e),
        }
    }
}

pub fn handle_import(
    mut events: EventReader<ImportEvent>,
    mut regen_events: EventWriter<RegenerateEvent>,
) {
    for event in events.read() {
        match load_design(&event.path) {
            Ok(params) => {
                info!("imported design from {}", event.path);
                regen_events.write(RegenerateEvent::Edited(params));
            }
            Err(e) => error!("import failed: {}", e),
        }
    }
}

pub fn setup_rates(mut rates: ResMut<RateTable>) {
    match load_rates(RATES_FILE) {
        Ok(Some(table)) => {
            info!("loaded {} rate table from {}", table.currency, RATES_FILE);
            *rates = table;
        }
        Ok(None) => debug!("no {}, using built in rates", RATES_FILE),
        Err(e) => error!("ignoring {}: {}", RATES_FILE, e),
    }
}
