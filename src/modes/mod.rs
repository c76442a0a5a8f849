pub mod graphical;
pub mod terminal;

pub use graphical::GraphicalMode;
pub use terminal::TerminalMode;
