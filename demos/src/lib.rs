//! Route-finding demo: a box of conduit cells with some walls, a start and a
//! goal, searched with one of the strategies from `conduit-paths`.
//!
//! Scenarios are TOML documents; every field is optional:
//!
//! ```toml
//! size = [8, 1, 6]          # width, height, depth
//! start = [0, 0, 0]
//! goal = [7, 0, 5]
//! strategy = "astar"        # "astar", "bfs" or "greedy"
//! max_visits = 10000
//! walls = [[3, 0, 0], [3, 0, 1], [3, 0, 2]]
//! ```

use std::collections::HashSet;
use std::fmt::Write as _;

use anyhow::Context;
use conduit_core::{Pos3, Region};
use conduit_paths::{
    AStar, BreadthFirst, Budget, ConnectedPolicy, Endpoint, GreedyBestFirst, Path, Search,
    SearchError, SearchOutcome,
};
use serde::Deserialize;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Astar,
    Bfs,
    Greedy,
}

/// A scenario as read from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub size: [i32; 3],
    pub start: [i32; 3],
    pub goal: [i32; 3],
    pub strategy: Strategy,
    pub max_visits: Option<usize>,
    pub walls: Vec<[i32; 3]>,
}

impl Default for Scenario {
    fn default() -> Self {
        // A wall across the middle with a gap at the far end.
        let walls = (0..5).map(|z| [4, 0, z]).collect();
        Self {
            size: [9, 1, 6],
            start: [0, 0, 0],
            goal: [8, 0, 0],
            strategy: Strategy::Astar,
            max_visits: Some(10_000),
            walls,
        }
    }
}

fn pos([x, y, z]: [i32; 3]) -> Pos3 {
    Pos3::new(x, y, z)
}

impl Scenario {
    pub fn from_toml(src: &str) -> anyhow::Result<Self> {
        toml::from_str(src).context("invalid scenario")
    }

    pub fn region(&self) -> Region {
        let [w, h, d] = self.size;
        Region::with_size(w, h, d)
    }

    pub fn start(&self) -> Pos3 {
        pos(self.start)
    }

    pub fn goal(&self) -> Pos3 {
        pos(self.goal)
    }

    pub fn walls(&self) -> HashSet<Pos3> {
        self.walls.iter().copied().map(pos).collect()
    }

    /// Every cell of the region that is not a wall.
    pub fn open_cells(&self) -> HashSet<Pos3> {
        let walls = self.walls();
        self.region().into_iter().filter(|p| !walls.contains(p)).collect()
    }

    /// Run the configured search.
    pub fn run(&self) -> anyhow::Result<SearchOutcome<Pos3>> {
        if self.region().is_empty() {
            anyhow::bail!("scenario region {} is empty", self.region());
        }
        let policy = ConnectedPolicy::new(self.open_cells()).bounded(self.region());
        policy.check_endpoints(self.start(), self.goal())?;
        let walls = self.walls();
        for (role, pos) in [(Endpoint::Start, self.start()), (Endpoint::Goal, self.goal())] {
            if walls.contains(&pos) {
                return Err(SearchError::InvalidInput {
                    role,
                    pos,
                    reason: "inside a wall".into(),
                }
                .into());
            }
        }

        let mut budget = Budget::new(policy);
        if let Some(n) = self.max_visits {
            budget = budget.max_visits(n);
        }

        let goal = self.goal();
        let mut search: Box<dyn Search<Pos3> + '_> = match self.strategy {
            Strategy::Astar => Box::new(AStar::new(goal, &budget)),
            Strategy::Bfs => Box::new(BreadthFirst::new(goal, &budget)),
            Strategy::Greedy => Box::new(GreedyBestFirst::new(goal, &budget)),
        };
        let outcome = search.find_nodes(self.start());
        log::info!(
            "{:?}: {} ({} visits)",
            self.strategy,
            outcome,
            search.state().visits()
        );
        Ok(outcome)
    }
}

/// Draw every Y layer of the scenario, top-down, with the path marked.
///
/// `#` wall, `.` open, `*` path, `S` start, `G` goal.
pub fn render(scenario: &Scenario, path: Option<&Path<Pos3>>) -> String {
    let region = scenario.region();
    let walls = scenario.walls();
    let on_path: HashSet<Pos3> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    let mut out = String::new();
    for y in region.min.y..region.max.y {
        if region.height() > 1 {
            let _ = writeln!(out, "y = {y}");
        }
        for z in region.min.z..region.max.z {
            for x in region.min.x..region.max.x {
                let p = Pos3::new(x, y, z);
                let ch = if p == scenario.start() {
                    'S'
                } else if p == scenario.goal() {
                    'G'
                } else if walls.contains(&p) {
                    '#'
                } else if on_path.contains(&p) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_goes_around_the_wall() {
        let scenario = Scenario::default();
        let outcome = scenario.run().unwrap();
        let path = outcome.path().unwrap();
        // Down to the gap at z = 5, across, and back up.
        assert_eq!(path.cost(), 18.0);
        assert!(path.contains(&Pos3::new(4, 0, 5)));
    }

    #[test]
    fn parses_partial_toml() {
        let scenario = Scenario::from_toml(
            r#"
            size = [4, 1, 1]
            goal = [3, 0, 0]
            strategy = "bfs"
            "#,
        )
        .unwrap();
        assert_eq!(scenario.strategy, Strategy::Bfs);
        assert_eq!(scenario.start(), Pos3::ZERO);
        // Unset fields keep the defaults.
        assert_eq!(scenario.max_visits, Some(10_000));
        let outcome = Scenario { walls: Vec::new(), ..scenario }.run().unwrap();
        assert_eq!(outcome.path().map(Path::len), Some(4));
    }

    #[test]
    fn stairs_scenario_climbs_through_the_hole() {
        let scenario = Scenario::from_toml(include_str!("../scenarios/stairs.toml")).unwrap();
        let outcome = scenario.run().unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.cost(), 18.0);
        assert!(path.contains(&Pos3::new(5, 1, 3)));
        assert!(render(&scenario, Some(path)).starts_with("y = 0\nS"));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(Scenario::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn endpoint_outside_region_is_an_error() {
        let scenario = Scenario {
            goal: [20, 0, 0],
            ..Scenario::default()
        };
        let err = scenario.run().unwrap_err();
        assert!(err.to_string().contains("invalid goal node"));
    }

    #[test]
    fn walled_in_goal_has_no_path() {
        let scenario = Scenario {
            size: [5, 1, 1],
            goal: [4, 0, 0],
            walls: vec![[2, 0, 0]],
            ..Scenario::default()
        };
        assert_eq!(scenario.run().unwrap(), SearchOutcome::NoPath);
    }

    #[test]
    fn tiny_budget_aborts() {
        let scenario = Scenario {
            max_visits: Some(2),
            ..Scenario::default()
        };
        assert!(scenario.run().unwrap().is_aborted());
    }

    #[test]
    fn render_marks_path() {
        let scenario = Scenario {
            size: [4, 1, 2],
            start: [0, 0, 0],
            goal: [3, 0, 0],
            walls: vec![[1, 0, 0], [2, 0, 0]],
            ..Scenario::default()
        };
        let outcome = scenario.run().unwrap();
        let drawn = render(&scenario, outcome.path());
        assert_eq!(drawn, "S##G\n****\n");
    }

    #[test]
    fn endpoint_on_a_wall_is_an_error() {
        let scenario = Scenario {
            goal: [4, 0, 2],
            ..Scenario::default()
        };
        let err = scenario.run().unwrap_err();
        assert_eq!(err.to_string(), "invalid goal node (4, 0, 2): inside a wall");

        let scenario = Scenario {
            start: [4, 0, 0],
            ..Scenario::default()
        };
        let err = scenario.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SearchError>(),
            Some(SearchError::InvalidInput { role: Endpoint::Start, .. })
        ));
    }
}
