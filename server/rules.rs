use serde::{Deserialize, Serialize};

use crate::network::{Link, Network, Safety};

const TRANSFER_PENALTY: f64 = 30.0;
const SLOW_TRANSFER_PENALTY: f64 = 10.0;
const CROWDED_PENALTY: f64 = 15.0;
const LOW_SAFETY_PENALTY: f64 = 20.0;
const MEDIUM_SAFETY_PENALTY: f64 = 5.0;

/// Rider preferences. Missing fields read as "not requested".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub avoid_transfers: bool,
    pub wheelchair: bool,
    /// Only an explicit `false` changes anything
    pub prefer_fastest: Option<bool>,
    pub avoid_crowded: bool,
    pub safe_priority: bool,
    /// Fractional budgets are accepted
    pub budget: Option<f64>,
}

/// A rule adjusts the network for the given preferences and reports whether
/// it changed anything.
pub type Rule = fn(&mut Network, &Preferences) -> bool;

/// Runs named rules, in registration order, over a copy of a network
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<(&'static str, Rule)>,
}

impl RuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, name: &'static str, rule: Rule) {
        self.rules.push((name, rule));
    }

    /// Engine with every built-in rule
    #[must_use]
    pub fn standard() -> Self {
        let mut engine = Self::new();
        engine.add_rule("avoid_transfers", avoid_transfers);
        engine.add_rule("wheelchair_only", wheelchair_only);
        engine.add_rule("prefer_fastest_toggle", prefer_fastest);
        engine.add_rule("avoid_crowded", avoid_crowded);
        engine.add_rule("prioritize_safety", prioritize_safety);
        engine.add_rule("budget_constraint", budget_constraint);
        engine
    }

    /// Returns the adjusted network and the names of the rules that changed it
    #[must_use]
    pub fn run(&self, network: &Network, preferences: &Preferences) -> (Network, Vec<String>) {
        let mut adjusted = network.clone();
        let applied = self
            .rules
            .iter()
            .filter_map(|(name, rule)| rule(&mut adjusted, preferences).then(|| (*name).to_string()))
            .collect();
        (adjusted, applied)
    }
}

fn penalize(network: &mut Network, penalty: impl Fn(&Link) -> f64) -> bool {
    let mut changed = false;
    network.update_links(|link| {
        let extra = penalty(link);
        if extra > 0.0 {
            link.weight += extra;
            changed = true;
        }
    });
    changed
}

fn avoid_transfers(network: &mut Network, preferences: &Preferences) -> bool {
    if !preferences.avoid_transfers {
        return false;
    }
    penalize(network, |link| if link.is_transfer { TRANSFER_PENALTY } else { 0.0 })
}

fn wheelchair_only(network: &mut Network, preferences: &Preferences) -> bool {
    if !preferences.wheelchair {
        return false;
    }
    // Works on links: the sample stations carry no accessibility flag of their own
    network.remove_links(|link| !link.wheelchair) > 0
}

fn prefer_fastest(network: &mut Network, preferences: &Preferences) -> bool {
    if preferences.prefer_fastest != Some(false) {
        return false;
    }
    penalize(network, |link| if link.is_transfer { SLOW_TRANSFER_PENALTY } else { 0.0 });
    true
}

fn avoid_crowded(network: &mut Network, preferences: &Preferences) -> bool {
    if !preferences.avoid_crowded {
        return false;
    }
    penalize(network, |link| if link.crowded { CROWDED_PENALTY } else { 0.0 })
}

fn prioritize_safety(network: &mut Network, preferences: &Preferences) -> bool {
    if !preferences.safe_priority {
        return false;
    }
    penalize(network, |link| match link.safety {
        Safety::Low => LOW_SAFETY_PENALTY,
        Safety::Medium => MEDIUM_SAFETY_PENALTY,
        Safety::High => 0.0,
    })
}

fn budget_constraint(network: &mut Network, preferences: &Preferences) -> bool {
    let Some(budget) = preferences.budget else {
        return false;
    };
    network.remove_links(|link| f64::from(link.cost) > budget) > 0
}
