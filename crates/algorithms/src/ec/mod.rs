//! Elliptic curve primitives
//!
//! Affine points on short Weierstrass curves y² = x³ + ax + b over a prime
//! field, the chord-and-tangent group law, and double-and-add scalar
//! multiplication. Points are a tagged enum, so the point at infinity has
//! no coordinates to misuse.
//!
//! The arithmetic is variable-time.

pub mod curve;
pub mod domain;
pub mod point;
pub mod secp256k1;
pub mod toy;

pub use curve::Curve;
pub use domain::DomainParameters;
pub use point::Point;
