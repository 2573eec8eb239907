use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;

use crate::error::LoadError;

pub const START_CAVE: &str = "start";
pub const END_CAVE: &str = "end";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaveKind {
    /// May be revisited any number of times.
    Big,

    /// Visited at most once per path, save for a single bonus revisit
    /// when the search policy allows it.
    Small,
}

impl CaveKind {
    pub fn of(name: &str) -> CaveKind {
        if name == START_CAVE || name == END_CAVE {
            return CaveKind::Small;
        }

        match name.chars().next() {
            Some(c) if c.is_uppercase() => CaveKind::Big,
            _ => CaveKind::Small,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cave {
    pub name: String,
    pub kind: CaveKind,
    pub connected_to: Vec<String>,
}

impl Cave {
    fn new(name: &str) -> Cave {
        Cave {
            name: name.to_owned(),
            kind: CaveKind::of(name),
            connected_to: Default::default(),
        }
    }

    #[inline]
    pub fn is_big(&self) -> bool {
        self.kind == CaveKind::Big
    }
}

/// Undirected cave graph, built once from an edge list and never modified after.
#[derive(Debug, Clone, Default)]
pub struct CaveSystem {
    caves: HashMap<String, Cave>,
    edge_count: usize,
}

impl CaveSystem {
    pub fn load(path: impl AsRef<Path>) -> Result<CaveSystem, LoadError> {
        let path = path.as_ref();
        let unavailable = |source| LoadError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()
            .map_err(unavailable)?;

        CaveSystem::from_lines(lines)
    }

    /// Builds the graph from `a-b` lines. The first line that doesn't split into
    /// exactly two non-empty names aborts the whole load.
    pub fn from_lines<I, S>(lines: I) -> Result<CaveSystem, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut system = CaveSystem::default();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let (src, dest) = line
                .split('-')
                .collect_tuple()
                .filter(|(src, dest): &(&str, &str)| !src.is_empty() && !dest.is_empty())
                .ok_or_else(|| LoadError::MalformedEdge {
                    line_number: index + 1,
                    line: line.to_owned(),
                })?;

            system.add_edge(src, dest);
        }

        Ok(system)
    }

    fn add_edge(&mut self, src: &str, dest: &str) {
        self.caves
            .entry(src.to_owned())
            .or_insert_with(|| Cave::new(src))
            .connected_to
            .push(dest.to_owned());
        self.caves
            .entry(dest.to_owned())
            .or_insert_with(|| Cave::new(dest))
            .connected_to
            .push(src.to_owned());
        self.edge_count += 1;
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Cave> {
        self.caves.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.caves.contains_key(name)
    }

    pub fn neighbors(&self, name: &str) -> &[String] {
        self.caves
            .get(name)
            .map(|cave| cave.connected_to.as_slice())
            .unwrap_or(&[])
    }

    pub fn caves(&self) -> impl Iterator<Item = &Cave> {
        self.caves.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.caves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.caves.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Pairs of big caves joined by an edge. Any such pair lets a path bounce
    /// between the two forever, so the number of paths is unbounded.
    pub fn connected_big_caves(&self) -> Vec<(&str, &str)> {
        self.caves
            .values()
            .filter(|cave| cave.is_big())
            .flat_map(|cave| {
                cave.connected_to
                    .iter()
                    .filter(move |next| cave.name.as_str() < next.as_str())
                    .filter(|next| CaveKind::of(next) == CaveKind::Big)
                    .map(move |next| (cave.name.as_str(), next.as_str()))
            })
            .sorted()
            .dedup()
            .collect()
    }
}

impl FromStr for CaveSystem {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaveSystem::from_lines(s.lines())
    }
}
