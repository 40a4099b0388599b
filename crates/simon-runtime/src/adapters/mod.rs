//! Terminal adapters for the session ports

pub mod terminal;

pub use terminal::{
    forward_lines, hsl_to_rgb, parse_input, spawn_reader, stdout_writer, SharedWriter,
    TerminalDisplay, TerminalSignalPad,
};
