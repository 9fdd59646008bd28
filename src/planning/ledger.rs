//! Month-scoped hours ledger.

use std::collections::BTreeMap;
use std::collections::btree_map;

use rust_decimal::Decimal;

/// Running total of assigned hours per worker within one month run.
///
/// A ledger starts at zero for every worker and is owned exclusively by a
/// single run; it is never shared across runs. For any worker without
/// overtime authorization, the recorded value never exceeds
/// `max_hours + 0.01` after a committed assignment (enforced by candidate
/// validation before commit).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoursLedger {
    hours: BTreeMap<String, Decimal>,
}

impl HoursLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds assigned hours to a worker's running total.
    pub fn credit(&mut self, worker: &str, hours: Decimal) {
        *self.hours.entry(worker.to_string()).or_default() += hours;
    }

    /// Returns a worker's cumulative assigned hours, zero when the worker
    /// has no assignments yet.
    pub fn hours_for(&self, worker: &str) -> Decimal {
        self.hours.get(worker).copied().unwrap_or_default()
    }

    /// Iterates over `(worker, hours)` entries in worker-name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Decimal> {
        self.hours.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_worker_reads_zero() {
        let ledger = HoursLedger::new();
        assert_eq!(ledger.hours_for("Anna"), Decimal::ZERO);
    }

    #[test]
    fn test_credit_accumulates() {
        let mut ledger = HoursLedger::new();
        ledger.credit("Anna", Decimal::from(6));
        ledger.credit("Anna", Decimal::from(7));
        ledger.credit("Bruno", Decimal::new(65, 1));
        assert_eq!(ledger.hours_for("Anna"), Decimal::from(13));
        assert_eq!(ledger.hours_for("Bruno"), Decimal::new(65, 1));
    }

    #[test]
    fn test_iterates_in_name_order() {
        let mut ledger = HoursLedger::new();
        ledger.credit("Zeno", Decimal::ONE);
        ledger.credit("Anna", Decimal::ONE);
        let names: Vec<&str> = ledger.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Zeno"]);
    }
}
