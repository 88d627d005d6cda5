//! Core grouping types.

/// Person identifier, in `1..=num_people`.
pub type Person = u32;

/// Row-major index of the unordered pair `{p1, p2}` among `num_people` people.
///
/// Pairs are ordered `(1,2), (1,3), ..., (1,n), (2,3), ...`. The arguments may
/// be given in either order but must be distinct and in range.
pub fn pair_index(num_people: u32, p1: Person, p2: Person) -> usize {
    let (lo, hi) = if p1 < p2 { (p1, p2) } else { (p2, p1) };
    let n = num_people as usize;
    let a = (lo - 1) as usize;
    let b = (hi - 1) as usize;
    a * (2 * n - a - 1) / 2 + (b - a - 1)
}

/// Iterates over every unordered pair `(p1, p2)` with `p1 < p2`, in
/// [`pair_index`] order.
pub fn pairs(num_people: u32) -> impl Iterator<Item = (Person, Person)> {
    (1..=num_people).flat_map(move |p1| ((p1 + 1)..=num_people).map(move |p2| (p1, p2)))
}

/// A complete day-by-day grouping.
///
/// `days[d][g]` lists the members of group `g` on day `d`, in ascending
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub days: Vec<Vec<Vec<Person>>>,
}

impl Assignment {
    /// Wraps raw groups, sorting the members of every group.
    pub fn new(mut days: Vec<Vec<Vec<Person>>>) -> Self {
        for groups in &mut days {
            for members in groups.iter_mut() {
                members.sort_unstable();
            }
        }
        Self { days }
    }

    /// Number of days.
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// Members of `group` on `day`, if both exist.
    pub fn group(&self, day: usize, group: usize) -> Option<&[Person]> {
        self.days
            .get(day)
            .and_then(|groups| groups.get(group))
            .map(Vec::as_slice)
    }

    /// Group index of `person` on `day`.
    pub fn group_of(&self, day: usize, person: Person) -> Option<usize> {
        self.days
            .get(day)?
            .iter()
            .position(|members| members.binary_search(&person).is_ok())
    }

    /// Number of days on which `p1` and `p2` share a group.
    pub fn times_together(&self, p1: Person, p2: Person) -> usize {
        (0..self.days.len())
            .filter(|&d| {
                let g1 = self.group_of(d, p1);
                g1.is_some() && g1 == self.group_of(d, p2)
            })
            .count()
    }
}
