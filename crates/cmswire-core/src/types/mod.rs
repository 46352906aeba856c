mod media;

pub use media::{Media, MediaFormat};
