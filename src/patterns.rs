//! Preset seed patterns in the text format accepted by `Grid::parse`.

/// A 2x2 square, the smallest still life. Stable on every step.
pub const BLOCK: &str = "\
    size 4
    m ....
    m .oo.
    m .oo.
    m ....";

/// Three cells in a row, the smallest oscillator. Period 2.
pub const BLINKER: &str = "\
    size 5
    m .....
    m .....
    m .ooo.
    m .....
    m .....";

/// Two offset rows of three, an oscillator. Period 2.
pub const TOAD: &str = "\
    size 6
    m ......
    m ......
    m ..ooo.
    m .ooo..
    m ......
    m ......";

/// Two blocks flashing their inner corners. Period 2.
pub const BEACON: &str = "\
    size 6
    m ......
    m .oo...
    m .oo...
    m ...oo.
    m ...oo.
    m ......";

/// The classic diagonal spaceship, headed for the bottom-right corner.
pub const GLIDER: &str = "\
    size 10
    m .o........
    m ..o.......
    m ooo.......
    m ..........
    m ..........
    m ..........
    m ..........
    m ..........
    m ..........
    m ..........";

pub fn by_name(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "block" => Some(BLOCK),
        "blinker" => Some(BLINKER),
        "toad" => Some(TOAD),
        "beacon" => Some(BEACON),
        "glider" => Some(GLIDER),
        _ => None,
    }
}
