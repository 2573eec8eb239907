use tracing::trace;

use crate::caves::{Cave, CaveSystem, END_CAVE, START_CAVE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisitPolicy {
    /// Every small cave is visited at most once.
    NoRevisits,

    /// One small cave per path may be visited twice. `start` never counts.
    OneBonusRevisit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    caves: Vec<&'a str>,
    bonus_used: bool,
}

impl<'a> Path<'a> {
    fn new() -> Self {
        Self {
            caves: vec![START_CAVE],
            bonus_used: false,
        }
    }

    /// Returns a new path one cave longer. Sibling branches each get their own copy.
    fn extended(&self, cave: &'a str, bonus_used: bool) -> Self {
        let mut caves = Vec::with_capacity(self.caves.len() + 1);
        caves.extend_from_slice(&self.caves);
        caves.push(cave);
        Self { caves, bonus_used }
    }

    #[inline]
    pub fn last(&self) -> &'a str {
        // paths are never empty, they always begin at the start cave
        self.caves[self.caves.len() - 1]
    }

    #[inline]
    pub fn contains(&self, cave: &str) -> bool {
        self.caves.iter().any(|visited| *visited == cave)
    }

    #[inline]
    pub fn caves(&self) -> &[&'a str] {
        &self.caves
    }

    #[inline]
    pub fn bonus_used(&self) -> bool {
        self.bonus_used
    }
}

/// Exhaustively walks every start-to-end path allowed by `policy`.
pub(crate) fn find_paths<'a>(system: &'a CaveSystem, policy: RevisitPolicy) -> Vec<Path<'a>> {
    let mut found_paths = vec![];
    let mut to_search = vec![Path::new()];

    while let Some(path) = to_search.pop() {
        let current_cave = path.last();
        if current_cave == END_CAVE {
            trace!(path = ?path.caves(), bonus_used = path.bonus_used(), "found path");
            found_paths.push(path);
            continue;
        }

        for next_name in system.neighbors(current_cave) {
            let next_name = next_name.as_str();
            if next_name == START_CAVE {
                continue;
            }

            let next_is_big = system.get(next_name).map_or(false, Cave::is_big);
            if next_is_big || !path.contains(next_name) {
                to_search.push(path.extended(next_name, path.bonus_used));
            } else if policy == RevisitPolicy::OneBonusRevisit && !path.bonus_used {
                // already visited this small cave, use it as our single re-visit
                to_search.push(path.extended(next_name, true));
            }
        }
    }

    found_paths
}

pub fn count_paths(system: &CaveSystem, policy: RevisitPolicy) -> usize {
    find_paths(system, policy).len()
}
