//! Raw, unvalidated representation of a maze file. The types in this module
//! describe what the maze source *says*; turning them into a usable
//! [`Grid`](crate::search::Grid) happens in the search module.

mod coordinate_line;
mod maze_description;
mod maze_line;

pub use coordinate_line::{CoordinateLine, Endpoint};
pub use maze_description::MazeDescription;
pub use maze_line::{MazeLine, NumberedLine};
