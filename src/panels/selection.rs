//! Form selection primitives

/// A single choice out of a fixed-length option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    index: usize,
    len: usize,
}

impl Choice {
    pub fn new(index: usize, len: usize) -> Self {
        Self {
            index: if len == 0 { 0 } else { index.min(len - 1) },
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward, wrapping
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back, wrapping
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// The selected value out of `options`
    pub fn value<'a>(&self, options: &'a [String]) -> &'a str {
        options.get(self.index).map(String::as_str).unwrap_or("")
    }
}

/// Held skills. Toggling removes a present skill or appends a missing one,
/// so entries stay unique and keep the order they were picked in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.skills.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_choice_wraps() {
        let mut c = Choice::new(0, 3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_choice_clamps_start() {
        let c = Choice::new(9, 3);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_empty_choice_is_inert() {
        let mut c = Choice::new(0, 0);
        c.next();
        c.prev();
        assert_eq!(c.value(&[]), "");
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut set = SkillSet::new();
        set.toggle("Python");
        set.toggle("SQL");
        assert_eq!(set.as_slice(), ["Python", "SQL"]);
        set.toggle("Python");
        assert_eq!(set.as_slice(), ["SQL"]);
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut set = SkillSet::new();
        set.toggle("Python");
        set.toggle("Docker");
        set.toggle("AWS");
        let before: HashSet<String> = set.as_slice().iter().cloned().collect();

        set.toggle("Docker");
        set.toggle("Docker");
        let after: HashSet<String> = set.as_slice().iter().cloned().collect();

        assert_eq!(before, after);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut set = SkillSet::new();
        for _ in 0..5 {
            set.toggle("Spark");
        }
        assert_eq!(set.as_slice(), ["Spark"]);
    }
}
