use super::modular::{inverse, reduce};
use crate::curve::Curve;
use crate::Error;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use std::fmt;

/// An affine point on a [`Curve`].
///
/// Points are immutable and can only be obtained through [`Point::new`],
/// which checks the curve equation, or through the group operations below,
/// which construct their results the same way. There is no representation
/// for the point at infinity: operations that would produce it return
/// [`Error::PointAtInfinity`].
#[derive(Clone)]
pub struct Point<'c> {
    x: BigInt,
    y: BigInt,
    curve: &'c Curve,
}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "x: {:#066x}", self.x)?;
        write!(f, "y: {:#066x}", self.y)
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point<'_> {}

impl<'c> Point<'c> {
    /// Constructs a point, failing with [`Error::NotOnCurve`] if `(x, y)`
    /// does not satisfy the curve equation. Coordinates are stored reduced
    /// modulo the prime modulus.
    pub fn new(curve: &'c Curve, x: BigInt, y: BigInt) -> Result<Self, Error> {
        if !curve.contains(&x, &y) {
            return Err(Error::NotOnCurve);
        }
        Ok(Self {
            x: reduce(&x, &curve.prime_modulus),
            y: reduce(&y, &curve.prime_modulus),
            curve,
        })
    }

    /// The x coordinate, in `[0, P)`.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The y coordinate, in `[0, P)`.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Returns `(x, P - y)`, the additive inverse of `self`.
    ///
    /// The result is constructed through [`Point::new`], so this only fails
    /// if `self` was not on the curve to begin with, which construction
    /// rules out.
    pub fn negate(&self) -> Result<Self, Error> {
        Self::new(self.curve, self.x.clone(), -&self.y)
    }

    /// Computes `self + self` with the tangent formula.
    ///
    /// Fails with [`Error::PointAtInfinity`] when `y = 0`, i.e. for points
    /// of order two.
    pub fn double(&self) -> Result<Self, Error> {
        self.add(self)
    }

    /// Chord-and-tangent addition.
    pub fn add(&self, rhs: &Self) -> Result<Self, Error> {
        if !std::ptr::eq(self.curve, rhs.curve) && self.curve != rhs.curve {
            return Err(Error::CurveMismatch);
        }

        let p = &self.curve.prime_modulus;
        let alpha = if self == rhs {
            if self.y.is_zero() {
                return Err(Error::PointAtInfinity);
            }
            let numerator = BigInt::from(3u8) * &self.x * &self.x + &self.curve.coeff_a;
            let denominator = inverse(&(BigInt::from(2u8) * &self.y), p)?;
            reduce(&(numerator * denominator), p)
        } else {
            if self.x == rhs.x {
                // P + (-P)
                return Err(Error::PointAtInfinity);
            }
            let denominator = inverse(&(&rhs.x - &self.x), p)?;
            reduce(&((&rhs.y - &self.y) * denominator), p)
        };

        let x = reduce(&(&alpha * &alpha - &self.x - &rhs.x), p);
        let y = reduce(&((&self.x - &x) * &alpha - &self.y), p);

        Self::new(self.curve, x, y)
    }

    /// Computes `scalar * self`.
    ///
    /// Walks up to the scalar by doubling while that does not overshoot,
    /// then closes the gap by adding the largest previously visited
    /// multiple that still fits and whose x coordinate differs from the
    /// current one, so the chord formula is never applied to `Q` and `-Q`.
    /// When no visited multiple qualifies, the base point itself is added.
    /// That step either doubles the base (once the walk has wrapped around
    /// the group order back onto it) or, when the scalar is a multiple of
    /// the group order, fails with [`Error::PointAtInfinity`].
    pub fn multiply(&self, scalar: &BigInt) -> Result<Self, Error> {
        if scalar.is_zero() {
            return Err(Error::PointAtInfinity);
        }

        let (times, base) = if scalar.is_negative() {
            (-scalar, self.negate()?)
        } else {
            (scalar.clone(), self.clone())
        };

        let mut n = BigInt::one();
        let mut current = base;
        let mut visited: Vec<(BigInt, Self)> = Vec::new();

        while n < times {
            visited.push((n.clone(), current.clone()));

            let doubled = &n + &n;
            if doubled <= times {
                current = current.double()?;
                n = doubled;
            } else {
                // NOTE visited is never empty here, the loop pushes before
                // branching
                let (step, point) = visited
                    .iter()
                    .filter(|(m, point)| &n + m <= times && point.x != current.x)
                    .max_by(|a, b| a.0.cmp(&b.0))
                    .unwrap_or(&visited[0]);
                let next = current.add(point)?;
                n += step;
                current = next;
            }
        }

        log::trace!("scalar multiplication visited {} multiples", visited.len());
        Ok(current)
    }
}
