//! Validation pipeline for order requests
//!
//! Each operation owns a fixed, ordered chain of validators. Validators share
//! a per-request [`OrderContext`] so that later steps and the terminal
//! handler reuse what earlier steps already looked up or normalized.

pub mod chain;
pub mod context;
pub mod extractor;
pub mod validators;

pub use chain::{Operation, ValidationStep, Validator};
pub use context::{FoundOrder, OrderContext, OrderRequest};
pub use extractor::OrderPayload;
