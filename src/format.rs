//! Scale-aware number formatting for axis and payoff labels.
//!
//! Lives entirely outside the geometry core: the axis passes raw numeric
//! values in and receives display strings back. All options are enumerated;
//! there is no template substitution.

/// Magnitude unit ladder: thousands, millions, billions, trillions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    One,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Unit {
    const SYMBOLS: [&'static str; 5] = ["", "k", "m", "b", "t"];

    /// Position on the ladder (0 for `One`, 4 for `Tera`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Unit::One => 0,
            Unit::Kilo => 1,
            Unit::Mega => 2,
            Unit::Giga => 3,
            Unit::Tera => 4,
        }
    }

    /// Display suffix for this unit.
    #[inline]
    pub fn symbol(self) -> &'static str {
        Self::SYMBOLS[self.index()]
    }
}

/// What kind of number is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumKind {
    /// No scaling, no decoration.
    #[default]
    Plain,
    /// A quantity: scaled by the quantity scale, no currency sign.
    Quantity,
    /// A price: scaled by the price scale, currency sign prefix.
    Price,
    /// A price times a quantity (revenue, profit): both scales combined,
    /// currency sign prefix.
    PriceQuantity,
    /// A fraction displayed in percent.
    Percent,
}

/// How one axis unit maps to economic magnitudes.
///
/// An axis tick at `x = 3` with `qty_scale = 500` and `qty_unit = Kilo`
/// represents 1.5 million units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSpec {
    pub qty_scale: f64,
    pub qty_unit: Unit,
    pub price_scale: f64,
    pub price_unit: Unit,
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self {
            qty_scale: 1.0,
            qty_unit: Unit::One,
            price_scale: 1.0,
            price_unit: Unit::One,
        }
    }
}

/// Formats a scalar under a scale spec.
///
/// The value is scaled, normalized onto the unit ladder so the mantissa lands
/// in `[1, 1000)` where possible, rounded to four significant digits, and
/// decorated with sign, currency, unit, and percent marks as the kind
/// requires. The ladder caps at trillions; beyond that only the symbol
/// saturates, never the number.
///
/// # Example
///
/// ```
/// use econsketch::format::{format_scaled, NumKind, ScaleSpec, Unit};
///
/// let spec = ScaleSpec { price_scale: 1.0, price_unit: Unit::Mega, ..Default::default() };
/// assert_eq!(format_scaled(1.5, &spec, NumKind::Price), "$1.5m");
/// assert_eq!(format_scaled(0.05, &spec, NumKind::Percent), "5%");
/// ```
pub fn format_scaled(value: f64, spec: &ScaleSpec, kind: NumKind) -> String {
    let (scale, ladder_start, currency, suffix) = match kind {
        NumKind::Plain => (1.0, 0, false, ""),
        NumKind::Quantity => (spec.qty_scale, spec.qty_unit.index(), false, ""),
        NumKind::Price => (spec.price_scale, spec.price_unit.index(), true, ""),
        NumKind::PriceQuantity => (
            spec.qty_scale * spec.price_scale,
            spec.qty_unit.index() + spec.price_unit.index(),
            true,
            "",
        ),
        NumKind::Percent => (100.0, 0, false, "%"),
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let dollar = if currency { "$" } else { "" };

    let mut magnitude = (value * scale).abs() * 1000f64.powi(ladder_start as i32);
    let mut rung = 0;
    while magnitude >= 1000.0 && rung < Unit::SYMBOLS.len() - 1 {
        magnitude /= 1000.0;
        rung += 1;
    }

    format!(
        "{sign}{dollar}{}{}{suffix}",
        round_sig(magnitude, 4),
        Unit::SYMBOLS[rung]
    )
}

/// Rounds to `digits` significant digits and renders without trailing zeros.
fn round_sig(x: f64, digits: i32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (x * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        let spec = ScaleSpec::default();
        assert_eq!(format_scaled(5.0, &spec, NumKind::Plain), "5");
        assert_eq!(format_scaled(-3.25, &spec, NumKind::Plain), "-3.25");
    }

    #[test]
    fn test_price_gets_currency() {
        let spec = ScaleSpec::default();
        assert_eq!(format_scaled(6.0, &spec, NumKind::Price), "$6");
        assert_eq!(format_scaled(-6.0, &spec, NumKind::Price), "-$6");
    }

    #[test]
    fn test_unit_ladder_promotion() {
        let spec = ScaleSpec::default();
        assert_eq!(format_scaled(1500.0, &spec, NumKind::Quantity), "1.5k");
        assert_eq!(format_scaled(1_500_000.0, &spec, NumKind::Price), "$1.5m");
        assert_eq!(
            format_scaled(2_000_000_000.0, &spec, NumKind::Quantity),
            "2b"
        );
    }

    #[test]
    fn test_scaled_quantity() {
        let spec = ScaleSpec {
            qty_scale: 500.0,
            qty_unit: Unit::Kilo,
            ..Default::default()
        };
        // 3 axis units = 3 * 500k = 1.5m.
        assert_eq!(format_scaled(3.0, &spec, NumKind::Quantity), "1.5m");
    }

    #[test]
    fn test_price_quantity_combines_scales() {
        let spec = ScaleSpec {
            qty_scale: 2.0,
            qty_unit: Unit::Kilo,
            price_scale: 3.0,
            price_unit: Unit::Kilo,
        };
        // 1 * 2k * 3k = 6m.
        assert_eq!(format_scaled(1.0, &spec, NumKind::PriceQuantity), "$6m");
    }

    #[test]
    fn test_percent() {
        let spec = ScaleSpec::default();
        assert_eq!(format_scaled(0.05, &spec, NumKind::Percent), "5%");
        assert_eq!(format_scaled(-0.125, &spec, NumKind::Percent), "-12.5%");
    }

    #[test]
    fn test_four_significant_digits() {
        let spec = ScaleSpec::default();
        assert_eq!(format_scaled(3.14159, &spec, NumKind::Plain), "3.142");
        assert_eq!(format_scaled(123.456, &spec, NumKind::Plain), "123.5");
    }

    #[test]
    fn test_ladder_saturates_symbol_only() {
        let spec = ScaleSpec::default();
        // Quadrillions stay numeric with the tera suffix.
        assert_eq!(
            format_scaled(2.0e15, &spec, NumKind::Quantity),
            "2000t"
        );
    }

    #[test]
    fn test_zero() {
        let spec = ScaleSpec::default();
        assert_eq!(format_scaled(0.0, &spec, NumKind::Quantity), "0");
        assert_eq!(format_scaled(0.0, &spec, NumKind::Price), "$0");
    }
}
