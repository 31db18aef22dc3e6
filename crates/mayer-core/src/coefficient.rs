//! Exact signed-rational weights attached to cluster diagrams.
//!
//! A [`RationalCoefficient`] stores `sign * numerator / denominator` with a
//! non-negative numerator and a strictly positive denominator. Arithmetic mutates
//! in place and never reduces to lowest terms, so denominators grow across sums
//! with differing denominators. Consumers that need a canonical rendering call
//! [`RationalCoefficient::reduced`].

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::MayerError;

/// Sign of a [`RationalCoefficient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// `+1`.
    Positive,
    /// `-1`.
    Negative,
}

impl Sign {
    /// Returns `+1` or `-1`.
    pub const fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// Returns the opposite sign.
    pub const fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Returns the sign of the product of two signed quantities.
    pub const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Capability contract for exact diagram weights.
///
/// Mutating operations work in place. Raw setters bypass normalization; callers
/// that use them are responsible for keeping the value consistent.
pub trait Coefficient: Clone + Display {
    /// Returns the stored (non-negative) numerator.
    fn numerator(&self) -> u64;

    /// Returns the stored (positive) denominator.
    fn denominator(&self) -> u64;

    /// Returns the sign of the value.
    fn sign(&self) -> Sign;

    /// Overwrites the numerator without normalization.
    fn set_numerator(&mut self, numerator: u64);

    /// Overwrites the denominator. Zero is rejected.
    fn set_denominator(&mut self, denominator: u64) -> Result<(), MayerError>;

    /// Overwrites the sign.
    fn set_sign(&mut self, sign: Sign);

    /// Replaces `self` with `self + other`.
    fn add(&mut self, other: &Self) -> Result<(), MayerError>;

    /// Replaces `self` with `self * other`.
    fn multiply(&mut self, other: &Self) -> Result<(), MayerError>;

    /// Adds exactly one.
    fn inc(&mut self) -> Result<(), MayerError>;

    /// Negates the value.
    fn switch_sign(&mut self);

    /// Returns an independent copy.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the value as a floating point number.
    fn value(&self) -> f64 {
        f64::from(self.sign().value()) * self.numerator() as f64 / self.denominator() as f64
    }
}

/// Exact signed rational number `sign * numerator / denominator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RationalCoefficient {
    numerator: u64,
    denominator: u64,
    sign: Sign,
}

impl RationalCoefficient {
    /// Creates a coefficient from its stored parts.
    pub fn new(numerator: u64, denominator: u64, sign: Sign) -> Result<Self, MayerError> {
        ensure_denominator(denominator)?;
        Ok(Self {
            numerator,
            denominator,
            sign,
        })
    }

    /// Creates the coefficient `numerator / denominator` from a signed numerator.
    pub fn fraction(numerator: i64, denominator: u64) -> Result<Self, MayerError> {
        let sign = if numerator < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(numerator.unsigned_abs(), denominator, sign)
    }

    /// Creates an integer-valued coefficient.
    pub fn from_integer(value: i64) -> Self {
        Self {
            numerator: value.unsigned_abs(),
            denominator: 1,
            sign: if value < 0 {
                Sign::Negative
            } else {
                Sign::Positive
            },
        }
    }

    /// Returns `true` when the value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns a copy in lowest terms. Zero reduces to `0/1` with a positive sign.
    pub fn reduced(&self) -> Self {
        if self.numerator == 0 {
            return Self {
                numerator: 0,
                denominator: 1,
                sign: Sign::Positive,
            };
        }
        let divisor = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
            sign: self.sign,
        }
    }

    /// Compares two coefficients as rational numbers, ignoring representation.
    pub fn same_value(&self, other: &Self) -> bool {
        if self.numerator == 0 || other.numerator == 0 {
            return self.numerator == other.numerator;
        }
        if self.sign != other.sign {
            return false;
        }
        let lhs = u128::from(self.numerator) * u128::from(other.denominator);
        let rhs = u128::from(other.numerator) * u128::from(self.denominator);
        lhs == rhs
    }

    fn signed_numerator(&self) -> i128 {
        i128::from(self.sign.value()) * i128::from(self.numerator)
    }

    // The combined numerator already carries both signs, so its sign is the sign
    // of the result.
    fn store_signed(&mut self, numerator: i128) -> Result<(), MayerError> {
        let magnitude = u64::try_from(numerator.unsigned_abs()).map_err(|_| {
            overflow("numerator does not fit into 64 bits").with_context("numerator", numerator)
        })?;
        self.numerator = magnitude;
        self.sign = if numerator < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(())
    }
}

impl Default for RationalCoefficient {
    fn default() -> Self {
        Self::from_integer(1)
    }
}

impl Coefficient for RationalCoefficient {
    fn numerator(&self) -> u64 {
        self.numerator
    }

    fn denominator(&self) -> u64 {
        self.denominator
    }

    fn sign(&self) -> Sign {
        self.sign
    }

    fn set_numerator(&mut self, numerator: u64) {
        self.numerator = numerator;
    }

    fn set_denominator(&mut self, denominator: u64) -> Result<(), MayerError> {
        ensure_denominator(denominator)?;
        self.denominator = denominator;
        Ok(())
    }

    fn set_sign(&mut self, sign: Sign) {
        self.sign = sign;
    }

    fn add(&mut self, other: &Self) -> Result<(), MayerError> {
        if self.denominator == other.denominator {
            let numerator = self.signed_numerator() + other.signed_numerator();
            return self.store_signed(numerator);
        }
        let own_den = i128::from(self.denominator);
        let other_den = i128::from(other.denominator);
        let numerator = self
            .signed_numerator()
            .checked_mul(other_den)
            .zip(other.signed_numerator().checked_mul(own_den))
            .and_then(|(lhs, rhs)| lhs.checked_add(rhs))
            .ok_or_else(|| overflow("numerator of sum overflowed"))?;
        let denominator = self.denominator.checked_mul(other.denominator).ok_or_else(|| {
            overflow("denominator of sum overflowed")
                .with_context("lhs", self.denominator)
                .with_context("rhs", other.denominator)
        })?;
        self.store_signed(numerator)?;
        self.denominator = denominator;
        Ok(())
    }

    fn multiply(&mut self, other: &Self) -> Result<(), MayerError> {
        let numerator = self.numerator.checked_mul(other.numerator).ok_or_else(|| {
            overflow("numerator of product overflowed")
                .with_context("lhs", self.numerator)
                .with_context("rhs", other.numerator)
        })?;
        let denominator = self.denominator.checked_mul(other.denominator).ok_or_else(|| {
            overflow("denominator of product overflowed")
                .with_context("lhs", self.denominator)
                .with_context("rhs", other.denominator)
        })?;
        self.numerator = numerator;
        self.denominator = denominator;
        self.sign = self.sign.product(other.sign);
        Ok(())
    }

    fn inc(&mut self) -> Result<(), MayerError> {
        let numerator = self.signed_numerator() + i128::from(self.denominator);
        self.store_signed(numerator)
    }

    fn switch_sign(&mut self) {
        self.sign = self.sign.flipped();
    }
}

impl Display for RationalCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.numerator)?;
        if self.denominator != 1 {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}

fn ensure_denominator(denominator: u64) -> Result<(), MayerError> {
    if denominator == 0 {
        return Err(
            MayerError::coefficient("invalid-denominator", "denominator must be positive")
                .with_context("denominator", denominator),
        );
    }
    Ok(())
}

fn overflow(message: &str) -> MayerError {
    MayerError::coefficient("coefficient-overflow", message)
        .with_hint("reduce intermediate sums with `reduced()` before accumulating further")
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
