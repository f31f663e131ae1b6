pub mod game;
pub mod not_found;

pub use game::GamePage;
pub use not_found::NotFound;
