use derive_more::{Add, AddAssign, Display, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// Typographic points, the native unit of PDF user space (1/72 of an inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pt(pub f32);

/// Millimetres, converted to [Pt] wherever they are used
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct Mm(pub f32);

/// Inches, converted to [Pt] wherever they are used
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display)]
pub struct In(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * 72.0 / 25.4)
    }
}

impl From<In> for Pt {
    fn from(inches: In) -> Self {
        Pt(inches.0 * 72.0)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert_eq!(Pt(3.0) * 2.0, Pt(6.0));
        assert_eq!(Pt(3.0) / 2.0, Pt(1.5));
        assert_eq!(Pt(3.0) - Pt(1.0), Pt(2.0));
        assert!(Pt(1.0) < Pt(2.0));
    }
}
