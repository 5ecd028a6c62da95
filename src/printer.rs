//! Terminal printing of Values with parentheses colored by depth.

use colored::*;
use std::io::{self, BufWriter, Write};

use crate::value::Value;


pub fn paren_color(depth: usize) -> (u8, u8, u8) {
    match depth % 6 {
        0 => (0, 255, 204),
        1 => (204, 51, 0),
        2 => (153, 255, 102),
        3 => (153, 102, 255),
        4 => (255, 255, 102),
        _ => (255, 179, 179),
    }
}

/// Writes `value` in S-expression syntax, coloring each parenthesis by its
/// nesting depth unless colors are disabled (see colored::control).
pub fn write_colored<W: Write>(w: &mut W, value: &Value) -> io::Result<()> {
    value.write_list(
        w,
        0,
        &mut |writer, atom, _depth| atom.write_atom(writer),
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    )
}

pub fn print_colored(value: &Value) -> io::Result<()> {
    let mut writer = BufWriter::new(io::stdout());
    write_colored(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}


#[cfg(test)]
#[path = "./printer_test.rs"]
mod printer_test;
