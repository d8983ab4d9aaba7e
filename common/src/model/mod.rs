pub mod grade;
pub mod student;
pub mod student_detail;
pub mod subject;

use serde::{Deserialize, Deserializer};

/// `serde(default)` only covers a missing key; the backend also sends
/// explicit `null`s. Both decode to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
