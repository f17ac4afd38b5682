//! Human-readable formatting shared by the vector and matrix types.

use std::fmt;

/// Number of decimals kept when displaying values.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Rounds the value to [`DISPLAY_DECIMALS`] decimals, mapping negative zero
/// to zero so that `-0.001` displays as `0`.
pub fn rounded(value: f32) -> f32 {
    let scale = 10_f32.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale + 0.0
}

/// Writes each row on its own line as `|\ta\tb\t...\t|`.
pub fn write_rows<R: AsRef<[f32]>>(
    f: &mut fmt::Formatter<'_>,
    rows: impl IntoIterator<Item = R>,
) -> fmt::Result {
    for row in rows {
        write!(f, "|")?;
        for value in row.as_ref() {
            write!(f, "\t{}", rounded(*value))?;
        }
        writeln!(f, "\t|")?;
    }
    Ok(())
}
