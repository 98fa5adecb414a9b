//! Wire labels and the free monoid of [`Type`]s they generate.
use core::fmt;
use core::ops::{Add, Bound, Index, RangeBounds};

use num_traits::{Pow, Zero};

/// An atomic wire label. Two objects are equal when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Object(pub String);

impl Object {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Object {
    fn from(name: &str) -> Self {
        Object(name.to_string())
    }
}

impl From<String> for Object {
    fn from(name: String) -> Self {
        Object(name)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bundle of wires: a list of [`Object`]s.
///
/// Types form the free monoid on objects, with [`Type::tensor`] (also `+`) as product and the
/// empty type [`Type::unit`] (also [`Zero::zero`]) as unit.
///
/// ```rust
/// use string_diagrams::object::Type;
///
/// let (x, y, z) = (Type::from("x"), Type::from("y"), Type::from("z"));
/// assert_eq!(x.tensor(&Type::unit()), x);
/// assert_eq!(x.tensor(&y).tensor(&z), x.tensor(&y.tensor(&z)));
/// assert_eq!(Type::new(["x", "y", "z"]).slice(1..), Type::new(["y", "z"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type(Vec<Object>);

impl Type {
    /// Build a type from objects or bare labels, which are wrapped into atomic [`Object`]s.
    pub fn new<T: Into<Object>>(objects: impl IntoIterator<Item = T>) -> Self {
        Type(objects.into_iter().map(Into::into).collect())
    }

    /// The empty type.
    pub fn unit() -> Self {
        Type(vec![])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn objects(&self) -> &[Object] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Object> {
        self.0.iter()
    }

    /// Concatenation of wire bundles.
    pub fn tensor(&self, other: &Type) -> Type {
        let mut objects = Vec::with_capacity(self.len() + other.len());
        objects.extend_from_slice(&self.0);
        objects.extend_from_slice(&other.0);
        Type(objects)
    }

    /// The `n`-fold tensor of `self` with itself; `power(0)` is the unit.
    pub fn power(&self, n: usize) -> Type {
        Type((0..n).flat_map(|_| self.0.iter().cloned()).collect())
    }

    /// The sub-type spanning `range`. Bounds past the end are clamped, so a slice is always
    /// defined.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Type {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        }
        .clamp(start, len);
        Type(self.0[start..end].to_vec())
    }

    /// Replace the `width` wires starting at `offset` with `replacement`.
    pub(crate) fn splice(&self, offset: usize, width: usize, replacement: &Type) -> Type {
        self.slice(..offset)
            .tensor(replacement)
            .tensor(&self.slice(offset.saturating_add(width)..))
    }
}

impl<T: Into<Object>> FromIterator<T> for Type {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Type::new(iter)
    }
}

impl From<&str> for Type {
    fn from(name: &str) -> Self {
        Type(vec![Object::from(name)])
    }
}

impl From<Object> for Type {
    fn from(object: Object) -> Self {
        Type(vec![object])
    }
}

impl Index<usize> for Type {
    type Output = Object;

    fn index(&self, index: usize) -> &Object {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Type {
    type Item = &'a Object;
    type IntoIter = core::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for Type {
    type Output = Type;

    fn add(mut self, other: Type) -> Type {
        self.0.extend(other.0);
        self
    }
}

impl Add<&Type> for &Type {
    type Output = Type;

    fn add(self, other: &Type) -> Type {
        self.tensor(other)
    }
}

impl Zero for Type {
    fn zero() -> Self {
        Type::unit()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Pow<usize> for &Type {
    type Output = Type;

    fn pow(self, n: usize) -> Type {
        self.power(n)
    }
}

impl core::iter::Sum for Type {
    fn sum<I: Iterator<Item = Type>>(iter: I) -> Type {
        iter.fold(Type::zero(), |acc, t| acc + t)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Ty()");
        }
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" @ ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}
