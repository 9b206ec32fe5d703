//! Material Balance
//!
//! The single material counter shared by harvesting (income) and building
//! (spending). Spenders go through [`MaterialBalance::pay`], which checks the
//! cost before mutating, so a failed purchase leaves the balance untouched.

/// Starting materials for a new session
pub const STARTING_MATERIALS: i32 = 100;

/// Process-wide material counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialBalance {
    amount: i32,
}

impl Default for MaterialBalance {
    fn default() -> Self {
        Self::new(STARTING_MATERIALS)
    }
}

impl MaterialBalance {
    pub fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Current amount
    pub fn get(&self) -> i32 {
        self.amount
    }

    /// Credit materials (harvest rewards)
    pub fn add(&mut self, amount: i32) {
        self.amount = self.amount.saturating_add(amount);
    }

    /// Check if we can afford a cost
    pub fn can_afford(&self, cost: i32) -> bool {
        self.amount >= cost
    }

    /// Pay a cost (returns false and changes nothing if it can't be afforded)
    pub fn pay(&mut self, cost: i32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.amount -= cost;
        true
    }
}
