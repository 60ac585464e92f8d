//! Display colors for Gantt blocks.
//!
//! Purely cosmetic: the engine never looks at colors. The mapping is
//! deterministic so exported charts look the same across runs.

/// Sixteen-step hue wheel.
pub const PROCESS_COLORS: [&str; 16] = [
    "#EF4444", "#F97316", "#F59E0B", "#EAB308", "#84CC16", "#22C55E", "#10B981", "#14B8A6",
    "#06B6D4", "#0EA5E9", "#3B82F6", "#6366F1", "#8B5CF6", "#A855F7", "#D946EF", "#EC4899",
];

/// Color for a process ID.
///
/// IDs ending in a number `n` (e.g. `"P3"`) get palette slot `(n - 1) mod 16`.
/// Other IDs fall back to their byte sum mod 16.
pub fn process_color(process_id: &str) -> &'static str {
    PROCESS_COLORS[palette_index(process_id)]
}

fn palette_index(process_id: &str) -> usize {
    let suffix_len = process_id
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    let digits_start = process_id.len() - suffix_len;

    let slot = match process_id[digits_start..].parse::<u64>() {
        Ok(n) => n.wrapping_sub(1) as usize,
        Err(_) => process_id.bytes().map(usize::from).sum(),
    };
    slot % PROCESS_COLORS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(process_color("P1"), "#EF4444");
        assert_eq!(process_color("P2"), "#F97316");
        assert_eq!(process_color("P16"), "#EC4899");
        // wraps around the palette
        assert_eq!(process_color("P17"), process_color("P1"));
        assert_eq!(process_color("job-3"), process_color("P3"));
    }

    #[test]
    fn test_non_numeric_fallback_is_stable() {
        let a = process_color("editor");
        assert_eq!(a, process_color("editor"));
        assert!(PROCESS_COLORS.contains(&a));
    }

    #[test]
    fn test_all_digits_and_zero() {
        assert_eq!(process_color("5"), PROCESS_COLORS[4]);
        // 0 - 1 wraps; still a valid slot
        assert!(PROCESS_COLORS.contains(&process_color("P0")));
    }
}
