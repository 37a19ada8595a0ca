//! Property tests for field arithmetic and modular inverses

use num_bigint::BigUint;
use num_traits::{One, Zero};
use primeshare::PrimeField;
use primeshare::field::mod_inverse;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Random integer of up to 80 bytes, large enough to exceed a 521-bit modulus
#[derive(Clone, Debug)]
struct LargeInt(BigUint);

impl Arbitrary for LargeInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 81;
        let bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        LargeInt(BigUint::from_bytes_be(&bytes))
    }
}

/// Nonzero element of the field, i.e. in [1, p - 1]
fn nonzero_element(value: &BigUint, field: &PrimeField) -> BigUint {
    let reduced = field.reduce_unsigned(value);
    if reduced.is_zero() {
        BigUint::one()
    } else {
        reduced
    }
}

#[quickcheck]
fn prop_inverse_correct_m521(value: LargeInt) -> bool {
    let field = PrimeField::mersenne(521).unwrap();
    let a = nonzero_element(&value.0, &field);

    let Ok(b) = mod_inverse(&a, field.modulus()) else {
        return false;
    };

    field.contains(&b) && field.mul(&a, &b).is_one()
}

#[quickcheck]
fn prop_inverse_correct_small_prime(value: u32) -> bool {
    let p = BigUint::from(1613u32);
    let a = BigUint::from(value % 1612 + 1);

    match mod_inverse(&a, &p) {
        Ok(b) => (&a * &b) % &p == BigUint::one(),
        Err(_) => false,
    }
}

#[quickcheck]
fn prop_inverse_of_inverse(value: LargeInt) -> bool {
    let field = PrimeField::mersenne(127).unwrap();
    let a = nonzero_element(&value.0, &field);

    let b = field.inverse(&a).unwrap();
    field.inverse(&b).unwrap() == a
}

#[quickcheck]
fn prop_reduce_lands_in_field(value: LargeInt, negative: bool) -> bool {
    let field = PrimeField::mersenne(521).unwrap();
    let mut signed = num_bigint::BigInt::from(value.0);
    if negative {
        signed = -signed;
    }
    field.contains(&field.reduce(&signed))
}

#[quickcheck]
fn prop_sub_then_add_is_identity(a: LargeInt, b: LargeInt) -> bool {
    let field = PrimeField::mersenne(127).unwrap();
    let a = field.reduce_unsigned(&a.0);
    let b = field.reduce_unsigned(&b.0);

    field.add(&field.sub(&a, &b), &b) == a
}
