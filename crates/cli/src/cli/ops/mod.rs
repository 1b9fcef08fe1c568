mod derive;
mod encode;

pub use derive::Derive;
pub use encode::Encode;
