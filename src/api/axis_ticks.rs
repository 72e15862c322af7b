/// Chooses magnitude-axis tick values from zero up to (at least) the data
/// maximum, using a 1/2/5 step ladder so at most four segments are drawn.
#[must_use]
pub fn magnitude_ticks(max_amount: u64) -> Vec<u64> {
    if max_amount == 0 {
        return vec![0, 1];
    }

    let raw_step = max_amount as f64 / 4.0;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|multiplier| multiplier * magnitude)
        .find(|step| max_amount as f64 / step <= 4.0)
        .unwrap_or(magnitude * 10.0)
        .max(1.0) as u64;

    let segments = max_amount.div_ceil(step);
    (0..=segments).map(|index| index * step).collect()
}

/// Compact category tick: the first three characters of the period label.
#[must_use]
pub fn abbreviate_label(label: &str) -> String {
    label.chars().take(3).collect()
}
