//! Unit Converter
//!
//! Maps measurement units to a small set of base units (`g` for mass, `ml`
//! for volume) so quantities expressed inconsistently across recipes still
//! sum correctly, and back to a human display unit after summation.
//!
//! Unrecognized units ("unidade", "colher", "xícara", ...) are their own base
//! unit and only ever merge with identical unit strings. Differently-worded
//! equivalents ("colher" vs "colher de sopa") never merge; known limitation.

/// Base unit for mass
pub const GRAM: &str = "g";
/// Base unit for volume
pub const MILLILITER: &str = "ml";

/// Convert a quantity to its base unit.
///
/// Recognized mass units collapse to grams, recognized volume units to
/// milliliters. Anything else passes through unchanged. Lookup is
/// case-insensitive on the trimmed unit token; the pass-through branch keeps
/// the original spelling so unknown units stay verbatim.
pub fn to_base(quantity: f64, unit: &str) -> (f64, String) {
    match unit.trim().to_lowercase().as_str() {
        "kg" => (quantity * 1000.0, GRAM.to_string()),
        "g" | "grama" | "gramas" => (quantity, GRAM.to_string()),
        "l" | "litro" | "litros" => (quantity * 1000.0, MILLILITER.to_string()),
        "ml" | "mililitro" | "mililitros" => (quantity, MILLILITER.to_string()),
        _ => (quantity, unit.trim().to_string()),
    }
}

/// Convert a base-unit quantity to its display form.
///
/// Applied exactly once, after summation: `g` >= 1000 renders as `kg`,
/// `ml` >= 1000 renders as `L`; everything else passes through. Idempotent
/// for already-displayed values since `kg`/`L` are not base units.
pub fn to_display(quantity: f64, unit: &str) -> (f64, String) {
    match unit {
        GRAM if quantity >= 1000.0 => (quantity / 1000.0, "kg".to_string()),
        MILLILITER if quantity >= 1000.0 => (quantity / 1000.0, "L".to_string()),
        _ => (quantity, unit.to_string()),
    }
}

/// Round a display quantity to 2 decimal places.
///
/// Applied only at the point of producing the final line item, never
/// mid-computation.
pub fn round_display(quantity: f64) -> f64 {
    (quantity * 100.0).round() / 100.0
}
