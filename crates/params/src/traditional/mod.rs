//! Constants for elliptic curves in short Weierstrass form

pub mod secp256k1;
pub mod toy;
