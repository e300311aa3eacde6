// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Seeded `xoroshiro128+` generator used to lay out reproducible test scenes.
///
/// Not cryptographically secure. Matching seeds yield identical scenes on
/// every platform, which keeps generated fixtures and benchmarks stable.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a generator from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        // All-zero is the one state xoroshiro never leaves.
        if state == [0, 0] {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Returns the next float in `[lo, hi)`; returns `lo` when the range is empty.
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_f32()
    }

    /// Returns the next index in `[0, len)` without modulo bias.
    ///
    /// Returns `0` for `len == 0` so callers indexing a non-empty table never
    /// need a fallible path.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_index(&mut self, len: usize) -> usize {
        let span = len as u64;
        if span <= 1 {
            return 0;
        }
        if span.is_power_of_two() {
            return (self.next_u64() & (span - 1)) as usize;
        }
        let bound = u64::MAX - u64::MAX % span;
        loop {
            let candidate = self.next_u64();
            if candidate < bound {
                return (candidate % span) as usize;
            }
        }
    }
}
