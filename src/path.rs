//! Path data scanning and coordinate rewriting.
//!
//! Path data is parsed into a typed sequence of commands, coordinates are
//! rewritten slot by slot per the grammar, and the result is re-serialized
//! with commands and arguments space-joined in their original order.

use crate::grammar::{self, Slot};

/// One command letter with its flat argument list, as scanned from path
/// data. The arguments cover every repeated tuple of the command.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub letter: char,
    pub args: Vec<f64>,
}

/// Parse path data into typed command groups.
///
/// Any character matching a command letter (case-insensitively) closes the
/// current group and opens the next one. Text before the first command
/// letter is dropped.
pub fn scan_path(d: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let mut current: Option<(char, String)> = None;

    for c in d.chars() {
        if grammar::is_command(c) {
            if let Some((letter, buf)) = current.take() {
                commands.push(PathCommand {
                    letter,
                    args: parse_args(&buf),
                });
            }
            current = Some((c, String::new()));
        } else if let Some((_, buf)) = current.as_mut() {
            buf.push(c);
        }
    }

    if let Some((letter, buf)) = current.take() {
        commands.push(PathCommand {
            letter,
            args: parse_args(&buf),
        });
    }

    commands
}

fn parse_args(raw: &str) -> Vec<f64> {
    raw.split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(coerce_number)
        .collect()
}

/// Permissive SVG numeric parsing: a malformed literal is 0, not an error.
pub fn coerce_number(token: &str) -> f64 {
    token.parse().unwrap_or(0.0)
}

/// Rewrite every coordinate in `d`, routing X slots through `fx` and Y
/// slots through `fy`; opaque slots pass through unchanged.
///
/// Each transform also receives the paired coordinate of its tuple when
/// the command has one (needed by non-axis-aligned transforms; translate
/// and scale ignore it).
pub fn map_coordinates<FX, FY>(d: &str, fx: FX, fy: FY) -> String
where
    FX: Fn(f64, Option<f64>) -> f64,
    FY: Fn(f64, Option<f64>) -> f64,
{
    let mut out: Vec<String> = Vec::new();

    for command in scan_path(d) {
        out.push(command.letter.to_string());

        let slots = grammar::slots(command.letter).unwrap_or(&[]);
        if slots.is_empty() {
            continue;
        }

        for chunk in command.args.chunks(slots.len()) {
            for (i, value) in chunk.iter().enumerate() {
                let converted = match slots[i] {
                    Slot::X => fx(*value, partner(chunk, slots, i, Slot::Y)),
                    Slot::Y => fy(*value, partner(chunk, slots, i, Slot::X)),
                    Slot::Pass => *value,
                };
                out.push(format_number(converted));
            }
        }
    }

    out.join(" ")
}

/// The other coordinate of the tuple, when the adjacent slot holds it.
fn partner(chunk: &[f64], slots: &[Slot], i: usize, wanted: Slot) -> Option<f64> {
    let j = match wanted {
        Slot::Y => i + 1,
        Slot::X => i.checked_sub(1)?,
        Slot::Pass => return None,
    };
    (j < chunk.len() && slots[j] == wanted).then(|| chunk[j])
}

/// Format a coordinate the way a browser would print it: integral values
/// without a fractional part, everything else shortest round-trip.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".into();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(n).to_string()
}
