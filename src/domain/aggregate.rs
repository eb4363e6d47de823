//! Ingredient Aggregator
//!
//! Consumes a flat list of (name, quantity, unit) triples pulled from one or
//! more recipes and produces a deduplicated, summed, display-ready checklist.

use std::collections::HashMap;

use super::ingredient::{AggregatedIngredient, IngredientTriple};
use super::normalize::normalize;
use super::units::{round_display, to_base, to_display};

/// Accumulator entry keyed by normalized name (plus base unit on fork)
struct Bucket {
    display_name: String,
    quantity: f64,
    base_unit: String,
}

/// Merge duplicate ingredients across recipes into single line items.
///
/// Triples whose normalized names are equal and whose base units match after
/// conversion merge into one entry with the base-unit sum. Same name with an
/// incompatible base unit forks a second entry keyed `"<key>_<unit>"` instead
/// of overwriting, so unit-mismatched summation never happens silently.
///
/// Output is converted to display units, rounded to 2 decimals, checked by
/// default and sorted by display name, case-insensitive ascending. That
/// ordering is a contract the UI and tests rely on.
///
/// Assumes validated input: positive quantities and non-empty names are the
/// caller's responsibility. An empty input list yields an empty output list.
pub fn aggregate(triples: &[IngredientTriple]) -> Vec<AggregatedIngredient> {
    let mut buckets: HashMap<String, Bucket> = HashMap::new();

    for triple in triples {
        let key = normalize(&triple.name);
        let (base_qty, base_unit) = to_base(triple.quantity, &triple.unit);

        let slot = match buckets.get(&key) {
            Some(existing) if existing.base_unit != base_unit => {
                // Incompatible base unit: fork under a unit-suffixed key
                format!("{}_{}", key, base_unit)
            }
            _ => key,
        };

        buckets
            .entry(slot)
            .and_modify(|b| b.quantity += base_qty)
            .or_insert_with(|| Bucket {
                display_name: triple.name.trim().to_string(),
                quantity: base_qty,
                base_unit: base_unit.clone(),
            });
    }

    let mut result: Vec<AggregatedIngredient> = buckets
        .into_iter()
        .map(|(id, bucket)| {
            let (qty, unit) = to_display(bucket.quantity, &bucket.base_unit);
            AggregatedIngredient {
                id,
                display_name: bucket.display_name,
                quantity: round_display(qty),
                unit,
                checked: true,
            }
        })
        .collect();

    result.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(name: &str, quantity: f64, unit: &str) -> IngredientTriple {
        IngredientTriple::new(name, quantity, unit)
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_merges_same_name_same_unit_into_kg() {
        // 450g + 600g of the same flour, spelled with different casing
        let out = aggregate(&[
            triple("Farinha de trigo", 450.0, "g"),
            triple("farinha de trigo", 600.0, "g"),
        ]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display_name, "Farinha de trigo");
        assert_eq!(out[0].quantity, 1.05);
        assert_eq!(out[0].unit, "kg");
        assert!(out[0].checked);
    }

    #[test]
    fn test_merges_volume_into_liters() {
        let out = aggregate(&[
            triple("Leite", 500.0, "ml"),
            triple("leite", 600.0, "ml"),
        ]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display_name, "Leite");
        assert_eq!(out[0].quantity, 1.1);
        assert_eq!(out[0].unit, "L");
    }

    #[test]
    fn test_mixed_magnitude_units_sum_in_base() {
        // 1kg + 250g must land in one bucket
        let out = aggregate(&[
            triple("Açúcar", 1.0, "kg"),
            triple("açúcar", 250.0, "g"),
        ]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].quantity, 1.25);
        assert_eq!(out[0].unit, "kg");
    }

    #[test]
    fn test_incompatible_base_units_never_merge() {
        let out = aggregate(&[
            triple("Leite", 1.0, "L"),
            triple("Leite", 2.0, "unidade"),
        ]);

        assert_eq!(out.len(), 2);
        let liters = out.iter().find(|i| i.unit == "L").unwrap();
        let units = out.iter().find(|i| i.unit == "unidade").unwrap();
        assert_eq!(liters.quantity, 1.0);
        assert_eq!(units.quantity, 2.0);
        // The forked entry carries the unit-suffixed id
        assert!(out.iter().any(|i| i.id == "leite"));
        assert!(out.iter().any(|i| i.id == "leite_unidade"));
    }

    #[test]
    fn test_unrecognized_units_merge_only_on_exact_match() {
        let out = aggregate(&[
            triple("Farinha", 1.0, "xícara"),
            triple("farinha", 2.0, "xícara"),
        ]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].quantity, 3.0);
        assert_eq!(out[0].unit, "xícara");
    }

    #[test]
    fn test_differently_worded_units_stay_separate() {
        // "colher" vs "colher de sopa" never merge; known limitation
        let out = aggregate(&[
            triple("Manteiga", 1.0, "colher"),
            triple("Manteiga", 1.0, "colher de sopa"),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_article_stripping_merges_names() {
        let out = aggregate(&[
            triple("o leite", 300.0, "ml"),
            triple("Leite", 200.0, "ml"),
        ]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].quantity, 500.0);
        assert_eq!(out[0].unit, "ml");
        // First-seen spelling wins
        assert_eq!(out[0].display_name, "o leite");
    }

    #[test]
    fn test_output_sorted_case_insensitive() {
        let out = aggregate(&[
            triple("tomate", 2.0, "unidade"),
            triple("Cebola", 1.0, "unidade"),
            triple("alho", 3.0, "unidade"),
        ]);

        let names: Vec<&str> = out.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(names, vec!["alho", "Cebola", "tomate"]);
    }

    #[test]
    fn test_sum_invariant_across_many_triples() {
        let inputs: Vec<IngredientTriple> =
            (1..=10).map(|i| triple("Arroz", i as f64 * 100.0, "g")).collect();
        let out = aggregate(&inputs);

        assert_eq!(out.len(), 1);
        // 100+200+...+1000 = 5500g = 5.5kg
        assert_eq!(out[0].quantity, 5.5);
        assert_eq!(out[0].unit, "kg");
    }
}
