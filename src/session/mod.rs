mod evaluate;
mod persistence;

pub use evaluate::evaluate;
pub use persistence::{load_profile, save_profile};
