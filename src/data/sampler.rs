// ============================================================
// Layer 4 — Train/Eval Sampler
// ============================================================
// Shuffles one class's images and slices off two disjoint,
// size-capped subsets:
//
//   shuffled: [ i7 i2 i9 i0 i4 i1 i8 ... ]
//              └── train ──┘└ eval ┘└ unused ┘
//
//   |train| = min(train_k, n)
//   |eval|  = min(eval_k, n - |train|)
//
// The generator is passed in, not created here. A run owns
// exactly one seeded generator and threads it through every
// class in sorted order, so the draws consumed by class A
// decide the permutation seen by class B. Reseeding per class
// or changing the class order changes every later assignment.
//
// The shuffle is rand's SliceRandom::shuffle (Fisher-Yates).
//
// Reference: rand crate documentation (seq::SliceRandom)

use rand::{seq::SliceRandom, Rng};

/// Sizes of the two subsets for a class of `n` items.
pub fn split_sizes(n: usize, train_k: usize, eval_k: usize) -> (usize, usize) {
    let train = train_k.min(n);
    let eval  = eval_k.min(n - train);
    (train, eval)
}

/// Shuffle `items` in place with `rng`, then split into (train, eval).
/// Items beyond train + eval are dropped.
pub fn sample_split<T, R>(
    mut items: Vec<T>,
    train_k:   usize,
    eval_k:    usize,
    rng:       &mut R,
) -> (Vec<T>, Vec<T>)
where
    R: Rng + ?Sized,
{
    let (k_train, k_eval) = split_sizes(items.len(), train_k, eval_k);

    items.shuffle(rng);

    // Keep train + eval, then cut eval off the tail
    items.truncate(k_train + k_eval);
    let eval = items.split_off(k_train);

    (items, eval)
}
