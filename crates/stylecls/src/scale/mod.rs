//! Scale family generators.
//!
//! The first builder pass registers every built-in token:
//!
//! | Family | Tokens | Value |
//! |--------|--------|-------|
//! | spacing | `pa3`, `mh2`, `pv0` ... | `spacing.value(n)`, `0` at step 0 |
//! | sizing | `w3`, `h1`, `min-w3`, `max-h4` ... | `sizing.value(n)` |
//! | percentage sizing | `w-50`, `h-100`, `w-third` | `"50%"` ... |
//! | radius | `br0` .. `br7` | `radius.value(n)`, `0` at step 0 |
//! | radius sides | `br--top` ... | zeroes the opposite edge's corners |
//! | border width | `ba`, `bl`, `br`, `bt`, `bb` | `1` |
//! | font size | `f1` .. `f6`, `f-headline` | ratio × `fontRem` |
//! | opacity | `o-90` .. `o-025` | `0.<digits>` |
//! | fixed | `flx-i`, `b`, `absolute-fill` ... | literal fragments |
//!
//! Spacing, sizing, radius and font-size tokens also get a sizes-table entry.

mod families;
mod progression;

pub use progression::{parse_opacity, Progression};

use crate::config::ScaleConfig;
use crate::error::BuildError;
use crate::fragment::StyleFragment;
use crate::table::StyleTable;

/// Highest accepted `sizes.steps`.
pub const MAX_STEPS: u32 = 64;

/// Registers every scale and fixed family into `table`.
pub(crate) fn register_scales(table: &mut StyleTable, scale: &ScaleConfig) -> Result<(), BuildError> {
    if scale.steps > MAX_STEPS {
        return Err(BuildError::InvalidScale {
            family: "steps",
            message: format!("steps {} exceeds the maximum of {}", scale.steps, MAX_STEPS),
        });
    }
    scale.spacing.validate("spacing", scale.steps)?;
    scale.sizing.validate("sizing", scale.steps)?;
    scale.radius.validate("radius", scale.steps)?;
    if !scale.font_rem.is_finite() || scale.font_rem < 0.0 {
        return Err(BuildError::InvalidScale {
            family: "font",
            message: format!("fontRem {} must be a non-negative number", scale.font_rem),
        });
    }

    register_spacing(table, scale);
    register_sizing(table, scale);
    register_radius(table, scale);
    register_font_sizes(table, scale.font_rem);
    register_opacity(table);
    register_border_widths(table);
    register_fixed(table);
    Ok(())
}

/// Step 0 followed by the progression.
fn with_zero_step(progression: &Progression, steps: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
    std::iter::once((0, 0.0)).chain(progression.values(steps))
}

fn register_spacing(table: &mut StyleTable, scale: &ScaleConfig) {
    for (n, value) in with_zero_step(&scale.spacing, scale.steps) {
        for (prefix, stem) in families::SPACING {
            for (suffix, sides) in families::DIRECTIONS {
                let fragment: StyleFragment = sides
                    .iter()
                    .map(|side| (format!("{}{}", stem, side), value))
                    .collect();
                table.insert_sized(format!("{}{}{}", prefix, suffix, n), fragment, value);
            }
        }
    }
}

fn register_sizing(table: &mut StyleTable, scale: &ScaleConfig) {
    for (n, value) in scale.sizing.values(scale.steps) {
        for (prefix, property) in families::SIZING {
            table.insert_sized(
                format!("{}{}", prefix, n),
                StyleFragment::single(*property, value),
                value,
            );
        }
    }

    for (prefix, property) in &families::SIZING[..2] {
        for pct in families::PERCENTAGES {
            table.insert(
                format!("{}-{}", prefix, pct),
                StyleFragment::single(*property, format!("{}%", pct)),
            );
        }
        for (name, pct) in families::FRACTIONS {
            table.insert(
                format!("{}-{}", prefix, name),
                StyleFragment::single(*property, *pct),
            );
        }
    }
}

fn register_radius(table: &mut StyleTable, scale: &ScaleConfig) {
    for (n, value) in with_zero_step(&scale.radius, scale.steps) {
        table.insert_sized(
            format!("br{}", n),
            StyleFragment::single("borderRadius", value),
            value,
        );
    }

    for (side, corners) in families::RADIUS_SIDES {
        let fragment: StyleFragment = corners.iter().map(|corner| (*corner, 0)).collect();
        table.insert(format!("br--{}", side), fragment);
    }
}

fn register_font_sizes(table: &mut StyleTable, font_rem: f64) {
    for (token, ratio) in families::FONT_SIZES {
        let value = ratio * font_rem;
        table.insert_sized(*token, StyleFragment::single("fontSize", value), value);
    }
}

fn register_opacity(table: &mut StyleTable) {
    for digits in families::OPACITY_SUFFIXES {
        if let Some(value) = parse_opacity(digits) {
            table.insert(
                format!("o-{}", digits),
                StyleFragment::single("opacity", value),
            );
        }
    }
}

fn register_border_widths(table: &mut StyleTable) {
    for (token, property) in families::BORDER_WIDTHS {
        table.insert(*token, StyleFragment::single(*property, 1));
    }
}

fn register_fixed(table: &mut StyleTable) {
    for (token, properties) in families::FIXED {
        let fragment: StyleFragment = properties
            .iter()
            .map(|(property, literal)| (*property, literal.to_value()))
            .collect();
        table.insert(*token, fragment);
    }
}
