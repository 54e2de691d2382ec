pub mod building;
pub mod floor;
pub mod key;
pub mod room;
pub mod space;

pub use building::{Building, IdGen, RoomPath, Section};
pub use floor::{Floor, FloorType};
pub use key::structural_key;
pub use room::{Room, RoomId, SelectionKind};
pub use space::{Space, SpaceId, SpaceType};
