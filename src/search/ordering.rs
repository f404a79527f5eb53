/// Reorders playable columns center-first, then alternating outward by
/// increasing distance (left before right), skipping columns that are not in
/// `valid`.
pub fn center_out(cols: usize, valid: &[usize]) -> Vec<usize> {
    let center = cols / 2;
    let mut ordered = Vec::with_capacity(valid.len());
    if valid.contains(&center) {
        ordered.push(center);
    }
    for dist in 1..=center {
        let left = center - dist;
        if valid.contains(&left) {
            ordered.push(left);
        }
        let right = center + dist;
        if valid.contains(&right) {
            ordered.push(right);
        }
    }
    ordered
}
