/// Positional identity between two sequences.
///
/// Returns the fraction of matching characters over positions
/// `0..min(len(a), len(b))`, in `[0.0, 1.0]`. Either side being empty
/// scores 0.0. Positions past the shorter sequence are ignored, so a
/// strict prefix scores 1.0 against the full sequence; there is no
/// alignment and no gap penalty. Lengths and positions are counted in
/// characters, not bytes.
pub fn identity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let n = a.chars().count().min(b.chars().count());
    let matches = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();

    matches as f64 / n as f64
}
