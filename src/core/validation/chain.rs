//! Ordered validator chains, one per operation

use super::context::{OrderContext, OrderRequest};
use super::validators::{
    validate_order_id, validate_order_properties, validate_status_for_delete,
    validate_status_for_update,
};
use crate::core::error::OrderError;
use crate::core::store::OrderStore;
use std::fmt;

/// Uniform validator signature
///
/// `Ok(())` lets the chain continue; an error ends it.
pub type Validator = fn(&OrderRequest, &mut OrderContext, &dyn OrderStore) -> Result<(), OrderError>;

/// A named step of a chain
#[derive(Clone, Copy)]
pub struct ValidationStep {
    pub name: &'static str,
    pub check: Validator,
}

impl fmt::Debug for ValidationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationStep").field("name", &self.name).finish()
    }
}

const PROPERTIES: ValidationStep = ValidationStep {
    name: "properties",
    check: validate_order_properties,
};

const IDENTITY: ValidationStep = ValidationStep {
    name: "identity",
    check: validate_order_id,
};

const STATUS_FOR_UPDATE: ValidationStep = ValidationStep {
    name: "status_for_update",
    check: validate_status_for_update,
};

const STATUS_FOR_DELETE: ValidationStep = ValidationStep {
    name: "status_for_delete",
    check: validate_status_for_delete,
};

const CREATE_CHAIN: &[ValidationStep] = &[PROPERTIES];
const READ_CHAIN: &[ValidationStep] = &[IDENTITY];
const UPDATE_CHAIN: &[ValidationStep] = &[IDENTITY, PROPERTIES, STATUS_FOR_UPDATE];
const DELETE_CHAIN: &[ValidationStep] = &[IDENTITY, STATUS_FOR_DELETE];

/// The five order operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }

    /// Validators guarding this operation, in execution order
    pub fn chain(&self) -> &'static [ValidationStep] {
        match self {
            Operation::Create => CREATE_CHAIN,
            Operation::Read => READ_CHAIN,
            Operation::Update => UPDATE_CHAIN,
            Operation::Delete => DELETE_CHAIN,
            Operation::List => &[],
        }
    }

    /// Run this operation's chain, stopping at the first failure
    pub fn validate(
        &self,
        request: &OrderRequest,
        context: &mut OrderContext,
        store: &dyn OrderStore,
    ) -> Result<(), OrderError> {
        for step in self.chain() {
            tracing::debug!(operation = self.as_str(), step = step.name, "running validator");
            (step.check)(request, context, store)?;
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
