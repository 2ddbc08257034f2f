mod snapshot;

pub use snapshot::EntityList;
