//! Catalog query: which robot types the player can buy right now.
//!
//! Cross-references the research collaborator's completed-unlock set
//! with the equipment catalog and the fleet's ownership counts. Pure
//! projection, no side effects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentSpec;
use crate::fleet::FleetState;

/// One entry in the equipment catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    /// Catalog identifier, e.g. `robot_mower_fairway`.
    pub equipment_id: String,
    /// Raw numeric record, frozen into robot stats at purchase time.
    pub spec: EquipmentSpec,
    /// Research id that must be completed before this shows up in the
    /// shop. `None` means available from the start.
    #[serde(default)]
    pub required_research: Option<String>,
}

/// The full equipment catalog supplied by the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    /// All known equipment definitions.
    pub definitions: Vec<EquipmentDefinition>,
}

impl EquipmentCatalog {
    /// Look up a definition by equipment id.
    #[must_use]
    pub fn get(&self, equipment_id: &str) -> Option<&EquipmentDefinition> {
        self.definitions
            .iter()
            .find(|d| d.equipment_id == equipment_id)
    }
}

/// The research collaborator's completed-unlock set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchState {
    completed: BTreeSet<String>,
}

impl ResearchState {
    /// Empty research state: nothing completed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a research id completed.
    pub fn complete(&mut self, research_id: impl Into<String>) {
        self.completed.insert(research_id.into());
    }

    /// Whether a research id is completed.
    #[must_use]
    pub fn is_completed(&self, research_id: &str) -> bool {
        self.completed.contains(research_id)
    }
}

impl FromIterator<String> for ResearchState {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}

/// A purchasable robot type with the player's current ownership count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOption {
    /// Catalog identifier.
    pub equipment_id: String,
    /// How many of this equipment id the fleet already owns.
    pub owned: usize,
}

/// List the autonomous equipment unlocked by completed research,
/// paired with owned counts. Locked equipment is omitted entirely,
/// not shown with a zero count.
#[must_use]
pub fn available_for_purchase(
    catalog: &EquipmentCatalog,
    research: &ResearchState,
    fleet: &FleetState,
) -> Vec<PurchaseOption> {
    catalog
        .definitions
        .iter()
        .filter(|def| def.spec.is_autonomous)
        .filter(|def| {
            def.required_research
                .as_deref()
                .map_or(true, |research_id| research.is_completed(research_id))
        })
        .map(|def| PurchaseOption {
            equipment_id: def.equipment_id.clone(),
            owned: fleet.count_by_equipment(&def.equipment_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn definition(equipment_id: &str, autonomous: bool, research: Option<&str>) -> EquipmentDefinition {
        EquipmentDefinition {
            equipment_id: equipment_id.to_string(),
            spec: EquipmentSpec {
                is_autonomous: autonomous,
                purchase_cost: Some(10_000.0),
                ..EquipmentSpec::default()
            },
            required_research: research.map(str::to_string),
        }
    }

    fn catalog() -> EquipmentCatalog {
        EquipmentCatalog {
            definitions: vec![
                definition("robot_mower_fairway", true, None),
                definition("robot_sprayer_rough", true, Some("auto_irrigation")),
                definition("robot_spreader_heavy", true, Some("soil_science")),
                definition("push_mower", false, None),
            ],
        }
    }

    #[test]
    fn test_locked_equipment_is_omitted() {
        let fleet = FleetState::new(Vec2::ZERO);
        let research = ResearchState::new();
        let options = available_for_purchase(&catalog(), &research, &fleet);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].equipment_id, "robot_mower_fairway");
        assert_eq!(options[0].owned, 0);
    }

    #[test]
    fn test_completed_research_unlocks_equipment() {
        let fleet = FleetState::new(Vec2::ZERO);
        let mut research = ResearchState::new();
        research.complete("auto_irrigation");

        let options = available_for_purchase(&catalog(), &research, &fleet);
        let ids: Vec<&str> = options.iter().map(|o| o.equipment_id.as_str()).collect();
        assert_eq!(ids, vec!["robot_mower_fairway", "robot_sprayer_rough"]);
    }

    #[test]
    fn test_manual_equipment_never_listed() {
        let fleet = FleetState::new(Vec2::ZERO);
        let research: ResearchState = ["auto_irrigation".to_string(), "soil_science".to_string()]
            .into_iter()
            .collect();

        let options = available_for_purchase(&catalog(), &research, &fleet);
        assert!(options.iter().all(|o| o.equipment_id != "push_mower"));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_owned_counts_reflect_fleet() {
        let cat = catalog();
        let mut fleet = FleetState::new(Vec2::ZERO);
        let def = cat.get("robot_mower_fairway").unwrap();
        fleet.purchase(&def.equipment_id, &def.spec).unwrap();
        fleet.purchase(&def.equipment_id, &def.spec).unwrap();

        let options = available_for_purchase(&cat, &ResearchState::new(), &fleet);
        assert_eq!(options[0].owned, 2);
    }
}
