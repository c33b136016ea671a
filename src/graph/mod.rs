pub mod traits;
pub mod adjacency;
pub mod directed;
pub mod grid;
pub mod generators;

pub use traits::Graph;
pub use adjacency::Adjacency;
pub use directed::DirectedGraph;
pub use grid::TileMap;
