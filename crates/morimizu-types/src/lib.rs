//! Shared type definitions for the Morimizu sorting visualizer.
//!
//! This crate is the single source of truth for the data that crosses the
//! HTTP boundary between the trace service and the browser front end.
//! Types flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Algorithm keys, sort order, and sample dataset kinds
//! - [`structs`] -- Snapshots, request bodies, and response payloads

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Algorithm, DatasetKind, ParseEnumError, SortOrder};
pub use structs::{
    AlgorithmInfo, ClientConfig, CompareRequest, Comparison, DatasetResponse, ParseRequest,
    ParsedArray, Snapshot, SortRequest,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to the `bindings/` directory relative to the
        // crate root.
        use ts_rs::TS;

        let _ = crate::enums::Algorithm::export_all();
        let _ = crate::enums::SortOrder::export_all();
        let _ = crate::enums::DatasetKind::export_all();
        let _ = crate::structs::Snapshot::export_all();
        let _ = crate::structs::SortRequest::export_all();
        let _ = crate::structs::CompareRequest::export_all();
        let _ = crate::structs::Comparison::export_all();
        let _ = crate::structs::AlgorithmInfo::export_all();
        let _ = crate::structs::DatasetResponse::export_all();
        let _ = crate::structs::ParseRequest::export_all();
        let _ = crate::structs::ParsedArray::export_all();
        let _ = crate::structs::ClientConfig::export_all();
    }
}
