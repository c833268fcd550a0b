//! Balance value types: party shares and per-category balance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Assignee, Percentage};

/// Running weighted totals for the two parties.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Tally {
    pub a: f64,
    pub b: f64,
}

impl Tally {
    pub fn add(&mut self, assignee: Assignee, weight: f64) {
        match assignee {
            Assignee::A => self.a += weight,
            Assignee::B => self.b += weight,
        }
    }

    pub fn total(&self) -> f64 {
        self.a + self.b
    }

    pub fn share(&self) -> PartyShare {
        PartyShare::from_totals(self.a, self.b)
    }
}

/// Percentage split of weighted load between the two parties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartyShare {
    pub a: Percentage,
    pub b: Percentage,
}

impl PartyShare {
    /// The 50/50 split used whenever there is no weight to divide.
    pub const NEUTRAL: Self = Self {
        a: Percentage::HALF,
        b: Percentage::HALF,
    };

    /// `a = 100 × A / (A + B)`, `b = 100 − a`; 50/50 when the total is zero.
    pub fn from_totals(a_total: f64, b_total: f64) -> Self {
        // One-sided splits are exact.
        if a_total > 0.0 && b_total == 0.0 {
            return Self { a: Percentage::HUNDRED, b: Percentage::ZERO };
        }
        if b_total > 0.0 && a_total == 0.0 {
            return Self { a: Percentage::ZERO, b: Percentage::HUNDRED };
        }
        match Percentage::of(a_total, a_total + b_total) {
            Some(a) => Self {
                a,
                b: a.complement(),
            },
            None => Self::NEUTRAL,
        }
    }

    /// The party carrying more than half the load, if any.
    pub fn heavier_party(&self) -> Option<Assignee> {
        if self.a.value() > self.b.value() {
            Some(Assignee::A)
        } else if self.b.value() > self.a.value() {
            Some(Assignee::B)
        } else {
            None
        }
    }

    /// Absolute difference between the two shares.
    pub fn imbalance(&self) -> Percentage {
        Percentage::new((self.a.value() - self.b.value()).abs())
    }
}

impl Default for PartyShare {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Balance within one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBalance {
    pub a: Percentage,
    pub b: Percentage,
    pub imbalance: Percentage,
}

impl CategoryBalance {
    /// 50/50 with no imbalance.
    pub const NEUTRAL: Self = Self {
        a: Percentage::HALF,
        b: Percentage::HALF,
        imbalance: Percentage::ZERO,
    };

    pub fn from_share(share: PartyShare) -> Self {
        Self {
            a: share.a,
            b: share.b,
            imbalance: share.imbalance(),
        }
    }

    /// The split without the derived imbalance.
    pub fn share(&self) -> PartyShare {
        PartyShare {
            a: self.a,
            b: self.b,
        }
    }
}

impl Default for CategoryBalance {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
