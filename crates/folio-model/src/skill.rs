//! Skill categories and proficiency levels.

use serde::{Deserialize, Serialize};

/// A group of related skills rendered as one card in the skills grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    /// Category display name (e.g. "Frontend").
    pub category: String,
    /// Emoji or icon identifier for the category header.
    pub icon: String,
    /// Skills within this category, in display order.
    pub skills: Vec<Skill>,
}

/// A single skill with a proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// Proficiency from 0 to 100; values above 100 are clamped on access.
    pub level: u8,
    /// Icon identifier (resolved to a glyph by the UI).
    pub icon: String,
}

impl Skill {
    /// Proficiency as a 0.0-1.0 fraction for the level bar width.
    pub fn level_fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_fraction_clamps_to_one() {
        let skill = Skill {
            level: 250,
            ..Skill::default()
        };
        assert!((skill.level_fraction() - 1.0).abs() < f32::EPSILON);
    }
}
