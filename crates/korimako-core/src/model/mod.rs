pub mod bird;
pub mod photo;

pub use bird::BirdRecord;
pub use photo::Photo;
