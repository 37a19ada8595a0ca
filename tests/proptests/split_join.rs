//! Property tests for split/join workflows

use num_bigint::BigUint;
use primeshare::domain::SplitConfig;
use primeshare::{PrimeField, Share, join, split};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;

fn field() -> PrimeField {
    PrimeField::mersenne(521).unwrap()
}

/// Random secret below 2^512, always inside the 2^521 - 1 field
#[derive(Clone, Debug)]
struct Secret(BigUint);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let bytes: Vec<u8> = (0..64).map(|_| u8::arbitrary(g)).collect();
        Secret(BigUint::from_bytes_be(&bytes))
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u32,
    num_shares: u32,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep share counts small so each case stays fast
        let num_shares = u32::from(u8::arbitrary(g) % 12) + 1; // 1..=12
        let threshold = u32::from(u8::arbitrary(g)) % num_shares + 1; // 1..=num_shares

        ValidParams {
            threshold,
            num_shares,
        }
    }
}

impl ValidParams {
    fn config(self) -> SplitConfig {
        SplitConfig::from_counts(self.num_shares, self.threshold).unwrap()
    }
}

fn split_seeded(secret: &BigUint, params: ValidParams, seed: u64) -> Vec<Share> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    split(secret, params.config(), &field(), &mut rng).unwrap()
}

/// Any random selection of at least threshold shares recovers the secret
#[quickcheck]
fn prop_random_share_selection_works(
    secret: Secret,
    params: ValidParams,
    seed: u64,
    extra: u8,
) -> bool {
    let mut shares = split_seeded(&secret.0, params, seed);

    let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
    shares.shuffle(&mut rng);

    let spare = params.num_shares - params.threshold;
    let take = params.threshold + u32::from(extra) % (spare + 1);

    join(&shares[..take as usize], &field()) == Ok(secret.0)
}

/// split returns exactly n shares with x = 1..=n
#[quickcheck]
fn prop_share_indices_distinct_and_nonzero(secret: Secret, params: ValidParams, seed: u64) -> bool {
    let shares = split_seeded(&secret.0, params, seed);

    shares.len() == params.num_shares as usize
        && shares
            .iter()
            .zip(1u32..)
            .all(|(share, x)| *share.x() == BigUint::from(x))
}

/// join does not depend on the order of its input
#[quickcheck]
fn prop_join_invariant_under_permutation(
    secret: Secret,
    params: ValidParams,
    seed: u64,
    take: u8,
) -> bool {
    let shares = split_seeded(&secret.0, params, seed);
    let take = u32::from(take) % params.num_shares + 1;
    let subset = &shares[..take as usize];

    let Ok(expected) = join(subset, &field()) else {
        return false;
    };

    let mut reversed = subset.to_vec();
    reversed.reverse();

    let mut shuffled = subset.to_vec();
    shuffled.shuffle(&mut ChaCha20Rng::seed_from_u64(seed ^ 0xff));

    join(&reversed, &field()) == Ok(expected.clone()) && join(&shuffled, &field()) == Ok(expected)
}

/// Fewer than threshold shares reconstruct some value, but not the secret
#[quickcheck]
fn prop_insufficient_shares_do_not_reveal(
    first: Secret,
    second: Secret,
    params: ValidParams,
    seed: u64,
) -> bool {
    if params.threshold < 2 || first.0 == second.0 {
        return true;
    }

    // Same seed, so both polynomials share every coefficient except the constant term
    let shares1 = split_seeded(&first.0, params, seed);
    let shares2 = split_seeded(&second.0, params, seed);
    let short = (params.threshold - 1) as usize;

    let (Ok(guess1), Ok(guess2)) = (
        join(&shares1[..short], &field()),
        join(&shares2[..short], &field()),
    ) else {
        return false;
    };

    guess1 != first.0 && guess2 != second.0
}

/// Shares from two different splits do not combine into either secret
#[quickcheck]
fn prop_mixed_shares_fail(first: Secret, second: Secret, params: ValidParams, seed: u64) -> bool {
    if params.threshold < 2 || first.0 == second.0 {
        return true;
    }

    let shares1 = split_seeded(&first.0, params, seed);
    let shares2 = split_seeded(&second.0, params, seed.wrapping_add(1));

    // Take the first half from one split and the rest, with distinct x, from the other
    let half = params.threshold as usize / 2;
    let mut mixed: Vec<Share> = shares1[..half].to_vec();
    mixed.extend_from_slice(&shares2[half..params.threshold as usize]);

    match join(&mixed, &field()) {
        Ok(recovered) => recovered != first.0 && recovered != second.0,
        Err(_) => false,
    }
}
