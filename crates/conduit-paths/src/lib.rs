//! Route finding through networks of connected nodes.
//!
//! The search strategies are generic over the node type ([`Node`]) and take
//! their connectivity from a caller-supplied [`TraversalPolicy`], which
//! enumerates neighbors and may veto the search at any visited node:
//!
//! - **A\*** shortest paths ([`AStar`])
//! - **Breadth-first** fewest-step paths ([`BreadthFirst`])
//! - **Greedy best-first** fast, non-optimal paths ([`GreedyBestFirst`])
//!
//! Every strategy implements [`Search`] and reports a [`SearchOutcome`] that
//! tells a found path apart from an exhausted search and a vetoed one.
//!
//! ```
//! use conduit_core::Pos3;
//! use conduit_paths::{AStar, Search, SearchOutcome};
//!
//! let mut search = AStar::with_grid(Pos3::new(2, 1, 0));
//! match search.find_nodes(Pos3::ZERO) {
//!     SearchOutcome::Found(path) => assert_eq!(path.cost(), 3.0),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Policies
//!
//! | Policy | Neighbors | Veto |
//! |---|---|---|
//! | [`GridPolicy`] | six axis neighbors | never |
//! | [`FnPolicy`] | closure | optional closure |
//! | [`ConnectedPolicy`] | faces a [`Connectable`] world links | outside bounds |
//! | [`Budget`] | wrapped policy | visit count / deadline, then wrapped policy |

mod astar;
mod bfs;
mod budget;
mod connect;
mod error;
mod greedy;
mod node;
mod outcome;
mod policy;
mod search;
mod state;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use budget::Budget;
pub use connect::{Connectable, ConnectedPolicy};
pub use error::{Endpoint, SearchError};
pub use greedy::GreedyBestFirst;
pub use node::{GridNode, Node};
pub use outcome::{Path, SearchOutcome};
pub use policy::{FnPolicy, GridPolicy, TraversalPolicy};
pub use search::Search;
pub use state::SearchState;
