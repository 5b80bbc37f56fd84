use core::fmt;
use core::hash::Hash;

/// A raw input record with a batch-unique identifier.
///
/// The id is everything the batch machinery needs from a record: it
/// keys the shared result table while workers complete in arbitrary
/// order, and the order index captured at the start of a batch is a
/// list of these ids. Ids must be unique within a single batch;
/// uniqueness across batches is not required.
///
/// # Example
///
/// ```
/// use fanjoin::Record;
///
/// struct User {
///     id: u64,
///     username: String,
/// }
///
/// impl Record for User {
///     type Id = u64;
///     fn id(&self) -> u64 {
///         self.id
///     }
/// }
/// ```
pub trait Record {
    /// Identifier type, used as the result table key.
    type Id: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;
}
