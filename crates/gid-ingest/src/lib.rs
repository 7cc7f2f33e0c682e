//! GID prescription dataset ingestion.
//!
//! # Features
//!
//! - **CSV Loading**: Read the 13-column GID dataset, positional columns, header skipped
//! - **Prescription Store**: Element listing, element resolution with suggestions, phase filtering
//! - **Phase Comparison**: Requirements kept, added and dropped between two phases
//! - **Prescription Mapping**: Resolve user parameters to dataset records
//! - **CSV Export**: Write filtered prescriptions back out
//!
//! # Example
//!
//! ```ignore
//! use gid_ingest::{PrescriptionStore, default_database_path, map_to_prescriptions};
//! use gid_model::ProjectPhase;
//!
//! let store = PrescriptionStore::from_path(&default_database_path())?;
//! let records = store.filter(ProjectPhase::Pde, "Mur")?;
//! let matches = map_to_prescriptions(&labels, &records, None);
//! ```

mod error;
mod export;
mod loader;
mod matching;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use loader::{
    DATABASE_ENV_VAR, DEFAULT_DATABASE_PATH, default_database_path, load_records, read_records,
};

// === Dataset Queries ===
pub use store::PrescriptionStore;

// === Prescription Mapping ===
pub use matching::{map_to_prescriptions, prescription_candidates};

// === Export ===
pub use export::write_prescriptions_csv;
