use crate::core::constants::{NUM_REALMS, REALM_COEFFICIENTS, TRIBULATION_BASE_RATES};
use serde::{Deserialize, Serialize};

/// The eight cultivation realms, in ascending order of power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Realm {
    QiRefining,
    Foundation,
    CoreFormation,
    NascentSoul,
    SpiritSevering,
    VoidRefinement,
    Integration,
    Mahayana,
}

impl Default for Realm {
    fn default() -> Self {
        Realm::QiRefining
    }
}

impl Realm {
    pub fn all() -> [Realm; NUM_REALMS] {
        [
            Realm::QiRefining,
            Realm::Foundation,
            Realm::CoreFormation,
            Realm::NascentSoul,
            Realm::SpiritSevering,
            Realm::VoidRefinement,
            Realm::Integration,
            Realm::Mahayana,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Realm::QiRefining => 0,
            Realm::Foundation => 1,
            Realm::CoreFormation => 2,
            Realm::NascentSoul => 3,
            Realm::SpiritSevering => 4,
            Realm::VoidRefinement => 5,
            Realm::Integration => 6,
            Realm::Mahayana => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Realm::QiRefining => "Qi Refining",
            Realm::Foundation => "Foundation",
            Realm::CoreFormation => "Core Formation",
            Realm::NascentSoul => "Nascent Soul",
            Realm::SpiritSevering => "Spirit Severing",
            Realm::VoidRefinement => "Void Refinement",
            Realm::Integration => "Integration",
            Realm::Mahayana => "Mahayana",
        }
    }

    /// The per-realm stat multiplier. Deliberately super-linear so each
    /// breakthrough feels like a power spike.
    pub fn coefficient(&self) -> u32 {
        REALM_COEFFICIENTS[self.index()]
    }

    /// The realm after this one, or `None` at Mahayana.
    pub fn next(&self) -> Option<Realm> {
        let all = Realm::all();
        all.get(self.index() + 1).copied()
    }

    /// Base tribulation success rate for leaving this realm.
    /// `None` for Mahayana, which has nowhere further to go.
    pub fn tribulation_base_rate(&self) -> Option<f64> {
        TRIBULATION_BASE_RATES.get(self.index()).copied()
    }
}
