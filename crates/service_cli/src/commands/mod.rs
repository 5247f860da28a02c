//! Command implementations.

pub mod discva;
pub mod nonlinearity;

use std::path::Path;
use tracing::info;
use xva_core::math::Curve;

use crate::Result;

/// Writes an EPE/ENE/PFE profile set as a CSV file `<dir>/<name>.csv`.
///
/// One row per grid point with columns `time,epe,ene,pfe` - the
/// array-of-pairs handoff consumed by external plotting.
pub fn export_profiles(dir: &str, name: &str, epe: &Curve, ene: &Curve, pfe: &Curve) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = Path::new(dir).join(format!("{name}.csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["time", "epe", "ene", "pfe"])?;
    for i in 0..epe.len() {
        writer.write_record([
            epe.times()[i].to_string(),
            epe.values()[i].to_string(),
            ene.values()[i].to_string(),
            pfe.values()[i].to_string(),
        ])?;
    }
    writer.flush()?;

    info!("Exported exposure profiles to {}", path.display());
    Ok(())
}
