/// The real roots of a polynomial of degree 3 or less.
///
/// Each variant carries exactly the roots that were found, so there are no
/// "unreported" slots to misread. Complex roots are not represented.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Roots {
    No([f32; 0]),
    One([f32; 1]),
    Two([f32; 2]),
    Three([f32; 3]),
}

impl Roots {
    /// Builds a `Roots` from the first `count` entries of a solver buffer.
    ///
    /// `count` is at most 3 and at most `slots.len()`; the solvers never
    /// produce anything else. A count of 3 or more takes the first three slots.
    pub(crate) fn from_slots(count: usize, slots: &[f32]) -> Roots {
        debug_assert!(count <= 3 && count <= slots.len());
        match (count, slots) {
            (0, _) => Roots::No([]),
            (1, &[a, ..]) => Roots::One([a]),
            (2, &[a, b, ..]) => Roots::Two([a, b]),
            (_, &[a, b, c, ..]) => Roots::Three([a, b, c]),
            _ => Roots::No([]),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        match self {
            Roots::No(r) => r,
            Roots::One(r) => r,
            Roots::Two(r) => r,
            Roots::Three(r) => r,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, f32> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.as_slice().to_vec()
    }
}

impl Default for Roots {
    fn default() -> Self {
        Roots::No([])
    }
}

impl AsRef<[f32]> for Roots {
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f32;
    type IntoIter = core::slice::Iter<'a, f32>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
