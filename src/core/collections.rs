/// Flattens any number of sequences into one: outer order first, element order
/// within each sequence preserved. Zero input sequences yields an empty vec.
pub fn concatenate<T>(sequences: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    let mut combined = Vec::new();
    for sequence in sequences {
        combined.extend(sequence);
    }
    combined
}
