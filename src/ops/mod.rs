pub mod copy;
pub mod numbering;
pub mod split;

pub use copy::{
    copy_floor, copy_room, copy_room_preserve, copy_space, duplicate_floor, save_as_new_version,
    CopyMode,
};
pub use numbering::{next_floor_label, renumber_spaces};
pub use split::split_room;
