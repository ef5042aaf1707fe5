//! Distance-bounded and depth-first traversals

pub mod bfs;
pub mod dfs;

pub use bfs::bfs_at_distance;
pub use dfs::dfs_reachability;
