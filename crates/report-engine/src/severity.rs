//! Color classification for defect severity.
//!
//! Defect colors arrive as free-form CSS-ish expressions. Classification is
//! a total function: every input, parseable or not, maps to exactly one of
//! the four severity categories.

use inspection_types::Severity;

/// Parse a color expression into an RGB triple.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)` with
/// integer channels 0-255, case-insensitive and whitespace-tolerant.
pub fn parse_color(expr: &str) -> Option<(u8, u8, u8)> {
    let expr = expr.trim();
    if let Some(hex) = expr.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = expr.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba")
        .or_else(|| lower.strip_prefix("rgb"))?
        .trim();
    let body = body.strip_prefix('(')?.strip_suffix(')')?;
    let mut channels = body.split(',').map(str::trim);
    let r = channels.next()?.parse::<u16>().ok()?;
    let g = channels.next()?.parse::<u16>().ok()?;
    let b = channels.next()?.parse::<u16>().ok()?;
    // The alpha channel, if any, is ignored for classification.
    if r > 255 || g > 255 || b > 255 {
        return None;
    }
    Some((r as u8, g as u8, b as u8))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    match hex.len() {
        3 => {
            let mut nibbles = hex.chars().map(|c| c.to_digit(16));
            let r = nibbles.next()??;
            let g = nibbles.next()??;
            let b = nibbles.next()??;
            Some(((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = a.0 as i32 - b.0 as i32;
    let dg = a.1 as i32 - b.1 as i32;
    let db = a.2 as i32 - b.2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Map a color expression to its nearest severity category.
///
/// Missing or unparseable input resolves to `ImmediateAttention`. On an
/// exact distance tie the first-enumerated category wins (red, orange,
/// blue, purple).
pub fn classify(expr: Option<&str>) -> Severity {
    let rgb = match expr.and_then(parse_color) {
        Some(rgb) => rgb,
        None => return Severity::ImmediateAttention,
    };

    let mut best = Severity::ImmediateAttention;
    let mut best_distance = u32::MAX;
    for candidate in Severity::ALL {
        let d = distance_sq(rgb, candidate.reference_color());
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }
    best
}
