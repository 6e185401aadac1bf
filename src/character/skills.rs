use crate::core::game_state::ActionResult;
use serde::{Deserialize, Serialize};

/// One technique in the character's skill book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillState {
    pub id: String,
    pub name: String,
    pub unlocked: bool,
    pub level: u32,
}

/// Per-character skill records: an unlock flag and a level for each known
/// technique. Skills are progression trophies and do not feed the stat
/// calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBook {
    pub skills: Vec<SkillState>,
}

impl Default for SkillBook {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillBook {
    /// Starting book: the basic sword art is known, the rest await manuals.
    pub fn new() -> Self {
        let defs = [
            ("sword_qi", "Sword Qi Slash", true),
            ("azure_palm", "Azure Dragon Palm", false),
            ("thunder_step", "Thunder Step", false),
            ("golden_bell", "Golden Bell Shield", false),
        ];
        Self {
            skills: defs
                .iter()
                .map(|(id, name, unlocked)| SkillState {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                    unlocked: *unlocked,
                    level: u32::from(*unlocked),
                })
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&SkillState> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn unlock(&mut self, id: &str) -> ActionResult {
        match self.skills.iter_mut().find(|s| s.id == id) {
            Some(skill) if skill.unlocked => {
                ActionResult::fail(format!("{} is already unlocked", skill.name))
            }
            Some(skill) => {
                skill.unlocked = true;
                skill.level = skill.level.max(1);
                ActionResult::ok(format!("Learned {}", skill.name))
            }
            None => ActionResult::fail(format!("Unknown skill: {}", id)),
        }
    }

    /// Raises the lowest-level unlocked skill by one level (the target of a
    /// skill-levelup pill). Fails if nothing is unlocked.
    pub fn level_up_lowest(&mut self) -> ActionResult {
        let target = self
            .skills
            .iter_mut()
            .filter(|s| s.unlocked)
            .min_by_key(|s| s.level);
        match target {
            Some(skill) => {
                skill.level += 1;
                ActionResult::ok(format!("{} advanced to level {}", skill.name, skill.level))
            }
            None => ActionResult::fail("No unlocked skill to advance".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_has_one_unlocked_skill() {
        let book = SkillBook::new();
        assert_eq!(book.skills.iter().filter(|s| s.unlocked).count(), 1);
        let sword = book.get("sword_qi").unwrap();
        assert!(sword.unlocked);
        assert_eq!(sword.level, 1);
    }

    #[test]
    fn test_unlock_is_idempotent_failure() {
        let mut book = SkillBook::new();
        assert!(book.unlock("azure_palm").success);
        assert!(!book.unlock("azure_palm").success);
        assert!(!book.unlock("no_such_skill").success);
    }

    #[test]
    fn test_level_up_lowest_picks_weakest() {
        let mut book = SkillBook::new();
        book.unlock("azure_palm");
        // sword_qi and azure_palm both level 1; raise one, then the other
        assert!(book.level_up_lowest().success);
        assert!(book.level_up_lowest().success);
        assert_eq!(book.get("sword_qi").unwrap().level, 2);
        assert_eq!(book.get("azure_palm").unwrap().level, 2);
    }

    #[test]
    fn test_level_up_with_nothing_unlocked_fails() {
        let mut book = SkillBook::new();
        for skill in &mut book.skills {
            skill.unlocked = false;
        }
        assert!(!book.level_up_lowest().success);
    }
}
