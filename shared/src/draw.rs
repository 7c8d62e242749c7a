use rand::Rng;

/// Cumulative-weight walk. `r` is a point in `[0, total)`; the first index
/// whose weight exceeds what is left of `r` wins. Returns `None` when the
/// walk runs off the end, which float rounding can cause near the tail.
pub fn select_index(weights: &[f64], r: f64) -> Option<usize> {
    let mut remaining = r;
    for (i, &weight) in weights.iter().enumerate() {
        if remaining < weight {
            return Some(i);
        }
        remaining -= weight;
    }
    None
}

/// Draws a winner index. Never fails for a non-empty vector: if the
/// weighted walk does not land (zero or non-finite total, rounding at the
/// tail) a uniform index over all entries is used instead.
pub fn draw_winner<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().sum();
    let selected = if total.is_finite() && total > 0.0 {
        let r = rng.gen::<f64>() * total;
        select_index(weights, r)
    } else {
        None
    };

    match selected {
        Some(index) => Some(index),
        None => {
            let index = rng.gen_range(0..weights.len());
            log::debug!("weighted walk did not select (total {}), uniform fallback to {}", total, index);
            Some(index)
        }
    }
}
