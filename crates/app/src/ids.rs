//! Typed Ids

use std::{
    cmp::Ordering,
    convert::Infallible,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
    sync::atomic::{AtomicI64, Ordering as AtomicOrdering},
};

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Record identifier scoped to one entity type.
///
/// Generated ids are decimal millisecond timestamps. Ids read back from
/// storage may also be opaque document ids, so the value is kept as text.
pub struct TypedId<T>(String, PhantomData<T>);

impl<T> TypedId<T> {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Reinterpret the id as belonging to another entity type.
    #[must_use]
    pub fn cast<U>(self) -> TypedId<U> {
        TypedId(self.0, PhantomData)
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<String> for TypedId<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for TypedId<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<i64> for TypedId<T> {
    fn from(value: i64) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Snapshots written by the browser front end store numeric ids.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self::from_string(text),
            RawId::Unsigned(number) => Self::from_string(number.to_string()),
            RawId::Signed(number) => Self::from_string(number.to_string()),
        })
    }
}

/// Wall-clock id generator.
///
/// Issues millisecond timestamps, bumped past the last issued value so two
/// ids drawn within the same millisecond never collide.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next<T>(&self) -> TypedId<T> {
        let now = Timestamp::now().as_millisecond();
        let mut last = self.last.load(AtomicOrdering::Relaxed);

        loop {
            let candidate = now.max(last.saturating_add(1));

            match self.last.compare_exchange_weak(
                last,
                candidate,
                AtomicOrdering::Relaxed,
                AtomicOrdering::Relaxed,
            ) {
                Ok(_) => return TypedId::from(candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    struct Marker;

    #[test]
    fn generated_ids_are_strictly_increasing() -> TestResult {
        let ids = IdGenerator::new();

        let first: i64 = ids.next::<Marker>().as_str().parse()?;
        let second: i64 = ids.next::<Marker>().as_str().parse()?;
        let third: i64 = ids.next::<Marker>().as_str().parse()?;

        assert!(first < second, "{first} should precede {second}");
        assert!(second < third, "{second} should precede {third}");

        Ok(())
    }

    #[test]
    fn deserializes_numeric_and_text_ids() -> TestResult {
        let numeric: TypedId<Marker> = serde_json::from_str("1718000000000")?;
        let text: TypedId<Marker> = serde_json::from_str("\"xK81fa09\"")?;

        assert_eq!(numeric.as_str(), "1718000000000");
        assert_eq!(text.as_str(), "xK81fa09");

        Ok(())
    }

    #[test]
    fn serializes_as_string() -> TestResult {
        let id = TypedId::<Marker>::from(42_i64);

        assert_eq!(serde_json::to_string(&id)?, "\"42\"");

        Ok(())
    }
}
