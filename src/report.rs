use std::fmt;

use itertools::Itertools;

use crate::catalog::Craft;

/// How many crafts still lack a written history, per category.
#[derive(Debug, PartialEq)]
pub struct CompletenessReport {
    pub filled: usize,
    pub empty: usize,
    /// Categories with their craft names, largest group first.
    pub missing: Vec<(String, Vec<String>)>,
}

impl CompletenessReport {
    pub fn build(crafts: &[Craft]) -> Self {
        let (filled, empty): (Vec<&Craft>, Vec<&Craft>) =
            crafts.iter().partition(|craft| craft.has_history());

        let missing = empty
            .iter()
            .map(|craft| (craft.category.clone(), craft.name.clone()))
            .into_group_map()
            .into_iter()
            .sorted_by(|(a_cat, a), (b_cat, b)| {
                b.len()
                    .cmp(&a.len())
                    .then_with(|| a_cat.cmp(b_cat))
            })
            .collect();

        Self {
            filled: filled.len(),
            empty: empty.len(),
            missing,
        }
    }
}

impl fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "データあり: {}", self.filled)?;
        writeln!(f, "データなし: {}", self.empty)?;
        for (category, names) in &self.missing {
            writeln!(f)?;
            writeln!(f, "{} ({}):", category, names.len())?;
            writeln!(f, "  {}", names.join(", "))?;
        }
        Ok(())
    }
}
