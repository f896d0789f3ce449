/// Collapses the sign pairs that concatenating derivative text leaves behind.
///
/// `--` becomes `+` across the whole string first, only then is `+-` turned
/// into `-`.
pub fn normalize(derivative: &str) -> String {
    derivative.replace("--", "+").replace("+-", "-")
}
