//! Wall lookup and perimeter/interior classification for polygon rooms.

mod nearest;
mod perimeter;

pub use nearest::{find_nearest_wall, NearestWall};
pub use perimeter::{
    classify_wall, is_wall_on_perimeter, is_wall_on_perimeter_within, wall_label, wall_length,
    WallKind, PERIMETER_TOLERANCE,
};
