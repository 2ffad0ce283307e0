//! Day, month and year interest tables
//!
//! Each table holds `factor^i` for `i` in `0..len`, truncated to a rational
//! with denominator 1,000,000.

pub mod quantize;
pub mod render;

pub use quantize::{RationalApprox, DENOMINATOR};

use crate::error::{Result, TableError};
use crate::rates::GrowthFactors;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Which compounding period a table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableKind {
    Day,
    Month,
    Year,
}

impl TableKind {
    /// Emission order
    pub const ALL: [TableKind; 3] = [TableKind::Day, TableKind::Month, TableKind::Year];

    /// Constant name downstream code compiles against
    pub fn const_name(&self) -> &'static str {
        match self {
            TableKind::Day => "DAY_INTEREST",
            TableKind::Month => "MONTH_INTEREST",
            TableKind::Year => "YEAR_INTEREST",
        }
    }

    /// Number of entries, index 0 included
    pub fn count(&self) -> usize {
        match self {
            TableKind::Day => 30,
            TableKind::Month => 12,
            TableKind::Year => 100,
        }
    }

    /// Per-period factor the table compounds
    pub fn base_factor(&self, factors: &GrowthFactors) -> f64 {
        match self {
            TableKind::Day => factors.daily,
            TableKind::Month => factors.monthly,
            TableKind::Year => factors.annual,
        }
    }
}

/// `base^i` for `i` in `0..count`
pub fn compound_sequence(base: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| base.powf(i as f64)).collect()
}

/// One quantized table
#[derive(Debug, Clone)]
pub struct InterestTable {
    kind: TableKind,
    entries: Vec<RationalApprox>,
}

impl InterestTable {
    /// Compound and quantize every entry of `kind`
    pub fn generate(kind: TableKind, factors: &GrowthFactors) -> Result<Self> {
        let base = kind.base_factor(factors);
        let entries = compound_sequence(base, kind.count())
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                RationalApprox::from_f64(value).ok_or(TableError::NumeratorOverflow {
                    table: kind.const_name(),
                    index,
                    value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Generated {} with {} entries (base factor {}, last numerator {})",
            kind.const_name(),
            entries.len(),
            base,
            entries.last().map(|e| e.numerator()).unwrap_or_default()
        );

        Ok(Self { kind, entries })
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.const_name()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RationalApprox] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&RationalApprox> {
        self.entries.get(index)
    }
}

impl Serialize for InterestTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InterestTable", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("entries", &self.entries)?;
        state.end()
    }
}

/// All three tables generated from the same growth factors
#[derive(Debug, Clone, Serialize)]
pub struct InterestTables {
    pub factors: GrowthFactors,
    pub day: InterestTable,
    pub month: InterestTable,
    pub year: InterestTable,
}

impl InterestTables {
    /// Generate every table before anything is rendered
    pub fn generate(factors: &GrowthFactors) -> Result<Self> {
        Ok(Self {
            factors: *factors,
            day: InterestTable::generate(TableKind::Day, factors)?,
            month: InterestTable::generate(TableKind::Month, factors)?,
            year: InterestTable::generate(TableKind::Year, factors)?,
        })
    }

    pub fn table(&self, kind: TableKind) -> &InterestTable {
        match kind {
            TableKind::Day => &self.day,
            TableKind::Month => &self.month,
            TableKind::Year => &self.year,
        }
    }

    /// Tables in emission order
    pub fn iter(&self) -> impl Iterator<Item = &InterestTable> {
        TableKind::ALL.into_iter().map(move |kind| self.table(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn default_tables() -> InterestTables {
        InterestTables::generate(&GrowthFactors::default()).unwrap()
    }

    #[test]
    fn test_table_lengths() {
        let tables = default_tables();
        assert_eq!(tables.day.len(), 30);
        assert_eq!(tables.month.len(), 12);
        assert_eq!(tables.year.len(), 100);
        assert!(tables.day.get(30).is_none());
    }

    #[test]
    fn test_names_follow_kind() {
        let tables = default_tables();
        for kind in TableKind::ALL {
            let table = tables.table(kind);
            assert_eq!(table.kind(), kind);
            assert_eq!(table.name(), kind.const_name());
            assert_eq!(table.len(), kind.count());
        }
    }

    #[test]
    fn test_serialized_table_keeps_name() {
        let value = serde_json::to_value(&default_tables().month).unwrap();
        assert_eq!(value["name"], "MONTH_INTEREST");
        assert_eq!(value["kind"], "Month");
        assert_eq!(value["entries"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn test_first_entry_is_one() {
        for table in default_tables().iter() {
            assert_eq!(table.entries()[0].numerator(), 1_000_000, "{}", table.name());
        }
    }

    #[test]
    fn test_denominator_is_fixed() {
        for table in default_tables().iter() {
            assert!(table.entries().iter().all(|e| e.denominator() == DENOMINATOR));
        }
    }

    #[test]
    fn test_year_values() {
        let year = default_tables().year;
        assert_eq!(year.entries()[1].numerator(), 1_100_000);
        assert_eq!(year.entries()[2].numerator(), 1_210_000);
        assert_eq!(year.entries()[3].numerator(), 1_331_000);
        assert_eq!(year.entries()[10].numerator(), 2_593_742);
        assert_eq!(year.entries()[99].numerator(), 12_527_829_399);
    }

    #[test]
    fn test_day_and_month_values() {
        let tables = default_tables();
        assert_eq!(tables.day.entries()[1].numerator(), 1_000_261);
        assert_eq!(tables.day.entries()[2].numerator(), 1_000_522);
        assert_eq!(tables.day.entries()[29].numerator(), 1_007_601);
        assert_eq!(tables.month.entries()[1].numerator(), 1_007_864);
        assert_eq!(tables.month.entries()[2].numerator(), 1_015_790);
        assert_eq!(tables.month.entries()[11].numerator(), 1_089_992);
    }

    #[test]
    fn test_numerators_non_decreasing() {
        for table in default_tables().iter() {
            assert!(
                table.entries().windows(2).all(|w| w[0].numerator() <= w[1].numerator()),
                "{} not monotone",
                table.name()
            );
        }
    }

    #[test]
    fn test_quantization_error_below_one_unit() {
        let tables = default_tables();
        for kind in TableKind::ALL {
            let exact = compound_sequence(kind.base_factor(&tables.factors), kind.count());
            for (entry, value) in tables.table(kind).entries().iter().zip(exact) {
                let diff = value - entry.to_f64();
                assert!(diff >= -1e-12);
                assert!(diff < 1.0 / DENOMINATOR as f64);
            }
        }
    }

    #[test]
    fn test_compound_sequence_starts_at_one() {
        let seq = compound_sequence(1.5, 4);
        assert_eq!(seq[0], 1.0);
        assert_abs_diff_eq!(seq[3], 3.375, epsilon = 1e-12);
        assert!(compound_sequence(2.0, 0).is_empty());
    }

    #[test]
    fn test_overflow_is_reported() {
        let factors = GrowthFactors::from_annual(1e10).unwrap();
        match InterestTable::generate(TableKind::Year, &factors) {
            Err(TableError::NumeratorOverflow { table, .. }) => assert_eq!(table, "YEAR_INTEREST"),
            other => panic!("expected overflow, got {:?}", other),
        }
    }
}
