//! sepalib — сборка документов SEPA Credit Transfer (ISO 20022 pain.001.001.03)
//! и конвертация запросов на перевод между форматами (CSV, XML, pain.001).

pub mod assemble;
pub mod clock;
pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod xml;
    pub mod pain001;
}

pub use assemble::{build_document, build_xml, to_xml};
pub use error::{Result, SepaError};
pub use model::{Payment, TransferRequest};
