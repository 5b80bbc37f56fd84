/// A source of random integers for token generation.
///
/// Abstracting the randomness lets tests substitute a fixed source and
/// assert on exact token output.
///
/// # Example
///
/// ```
/// use fanjoin::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedRand.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns the next random integer.
    fn rand(&self) -> T;
}
