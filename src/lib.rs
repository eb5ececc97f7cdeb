//! Consignment service.
//!
//! Accepts shipment records, asks the vessel service for a carrier that can
//! take them, binds the chosen vessel to the record and keeps it in an
//! append-only store.

pub mod clients;
pub mod config;
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod transport;
pub mod utils;

pub mod proto {
    pub mod consignment {
        tonic::include_proto!("consignment");
    }

    pub mod vessel {
        tonic::include_proto!("vessel");
    }
}
