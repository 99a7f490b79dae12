//! Small curves over y² = x³ + 7 used to exercise the group law by hand

/// Curve over F_17 with generator (15, 13) of order 18
pub mod f17 {
    /// Field modulus
    pub const P: u64 = 17;
    /// Curve coefficient a
    pub const A: u64 = 0;
    /// Curve coefficient b
    pub const B: u64 = 7;
    /// Generator x-coordinate
    pub const GX: u64 = 15;
    /// Generator y-coordinate
    pub const GY: u64 = 13;
    /// Order of the generator (not prime, so unsuitable for signing)
    pub const N: u64 = 18;
}

/// Curve over F_131 with a generator of prime order 11
///
/// The group has 132 points, so the cofactor is 12. Two nonces (4 and 7)
/// land on points whose x-coordinate is divisible by 11, which makes this
/// domain useful for exercising the signing retry path.
pub mod f131 {
    /// Field modulus
    pub const P: u64 = 131;
    /// Curve coefficient a
    pub const A: u64 = 0;
    /// Curve coefficient b
    pub const B: u64 = 7;
    /// Generator x-coordinate
    pub const GX: u64 = 42;
    /// Generator y-coordinate
    pub const GY: u64 = 39;
    /// Order of the generator
    pub const N: u64 = 11;
    /// Cofactor
    pub const H: u64 = 12;
}
