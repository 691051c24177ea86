mod app;
mod board;
mod input;

pub use app::SnakeApp;
