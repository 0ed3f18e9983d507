//! Boleto payment code engine
//!
//! Decodes, cross-converts and validates the two FEBRABAN encodings of a
//! Brazilian payment slip: the 44-digit bar code and the 47-digit typable
//! line.
//!
//! # Pipeline
//!
//! ```text
//! raw input
//!     |
//!     v
//! Normalizer  -> digits + form (44 = bar, 47 = line)
//!     |
//!     v
//! Segmenter   -> bank, currency, check digits, factors, free field
//!     |
//!     +--> Checksum engine (module-10 per block, module-11 overall)
//!     +--> Field decoder   (due date, value, bar/line layout)
//! ```
//!
//! # Example
//!
//! ```
//! use boleto_core::PaymentCode;
//!
//! let code = PaymentCode::new("00190.50095 40144.816069 06809.350314 3 37370000000100")?;
//! assert!(code.validate());
//! assert_eq!(code.bank_code(), "001");
//! assert_eq!(code.value().to_string(), "1.00");
//! assert_eq!(code.bar(), "00193373700000001000500940144816060680935031");
//! # Ok::<(), boleto_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod checksum;
pub mod code;
pub mod config;
pub mod decoder;
pub mod error;
pub mod normalizer;
pub mod segmenter;
pub mod types;

pub use checksum::{module10, module11};
pub use code::PaymentCode;
pub use config::Config;
pub use decoder::{bar_from_fields, decode_due_date, decode_value, format_line, line_from_fields};
pub use error::{Error, Result};
pub use normalizer::{normalize, NormalizedCode};
pub use segmenter::segment;
pub use types::*;
