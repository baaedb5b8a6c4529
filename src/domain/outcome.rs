use std::fmt;

use super::Beverage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PourStatus {
    Prepared,
    NotPrepared,
}

impl fmt::Display for PourStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PourStatus::Prepared => write!(f, "PREPARED"),
            PourStatus::NotPrepared => write!(f, "NOT_PREPARED"),
        }
    }
}

/// Human-readable explanation of why a beverage was not poured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectReason(pub String);

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The result of pouring one beverage. Reject reasons are only present when
/// the beverage was not prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PourOutcome {
    pub beverage: Beverage,
    pub status: PourStatus,
    pub reject_reasons: Vec<RejectReason>,
}

impl PourOutcome {
    pub fn prepared(beverage: Beverage) -> Self {
        Self {
            beverage,
            status: PourStatus::Prepared,
            reject_reasons: Vec::new(),
        }
    }

    pub fn not_prepared(beverage: Beverage, reason: impl Into<String>) -> Self {
        Self {
            beverage,
            status: PourStatus::NotPrepared,
            reject_reasons: vec![RejectReason(reason.into())],
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.status == PourStatus::Prepared
    }
}

impl fmt::Display for PourOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.beverage.id, self.status)?;
        for reason in &self.reject_reasons {
            write!(f, " : {}", reason)?;
        }
        Ok(())
    }
}
