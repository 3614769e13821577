use super::*;
use crossbeam::thread;

/// Sums the set bits of every byte, each byte read as unsigned.
pub fn fold_once(bytes: &[u8]) -> u64 {
    bytes.iter().map(|b| b.count_ones() as u64).sum()
}

/// Upper bound on fold threads: the number of cores, or 4 when unknown.
pub fn max_workers() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}

/// Same as [`fold_once`], split into `workers` contiguous chunks summed on
/// scoped threads. `workers` is clamped to `1..=max_workers()`.
pub fn fold_once_mt(bytes: &[u8], workers: usize) -> u64 {
    let workers = workers.clamp(1, max_workers());

    if workers == 1 || bytes.len() < workers {
        return fold_once(bytes);
    }
    let chunk_sz = (bytes.len() + workers - 1) / workers;
    thread::scope(|s| {
        let thrds: Vec<_> = bytes
            .chunks(chunk_sz)
            .map(|chunk| s.spawn(move |_| fold_once(chunk)))
            .collect();

        thrds
            .into_iter()
            .map(|thrd| thrd.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .sum()
    })
    .unwrap_or_else(|e| std::panic::resume_unwind(e))
}

pub fn encode_big_endian(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Folds `bytes` until two consecutive passes agree, starting from a seed of 0.
pub fn reduce_bytes(bytes: &[u8]) -> u64 {
    Compressor::new().reduce(bytes)
}

#[derive(Clone, Copy, Debug)]
pub struct Compressor {
    workers: usize,
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor {
    pub fn new() -> Compressor {
        Compressor { workers: 1 }
    }

    pub fn with_workers(workers: usize) -> Compressor {
        Compressor {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    // Only the first pass sees more than 8 bytes, so it is the only one
    // worth splitting.
    fn first_fold(&self, bytes: &[u8]) -> u64 {
        fold_once_mt(bytes, self.workers)
    }

    pub fn reduce(&self, bytes: &[u8]) -> u64 {
        let mut previous = 0;
        let mut current = self.first_fold(bytes);

        // No pass cap: after the first pass the value is at most 64 and
        // the popcount of such a value never grows.
        while current != previous {
            previous = current;
            current = fold_once(&encode_big_endian(current));
        }
        current
    }

    pub fn passes<'a>(&'a self, bytes: &'a [u8]) -> Passes<'a> {
        Passes {
            compressor: self,
            input: bytes,
            encoded: [0; 8],
            previous: 0,
            idx: 0,
            stage: Stage::Seeded,
        }
    }
}

/// Iterator over the passes of one reduction. The last item is always
/// `Stage::Converged`.
pub struct Passes<'a> {
    compressor: &'a Compressor,
    input: &'a [u8],
    encoded: [u8; 8],
    previous: u64,
    idx: usize,
    stage: Stage,
}

impl<'a> Passes<'a> {
    pub fn stage(&self) -> Stage {
        self.stage
    }
}

impl<'a> Iterator for Passes<'a> {
    type Item = Pass;

    fn next(&mut self) -> Option<Pass> {
        let (value, input_len) = match self.stage {
            Stage::Converged => return None,
            Stage::Seeded => (self.compressor.first_fold(self.input), self.input.len()),
            Stage::Folding => (fold_once(&self.encoded), self.encoded.len()),
        };

        self.stage = if value == self.previous {
            Stage::Converged
        } else {
            Stage::Folding
        };
        self.previous = value;
        self.encoded = encode_big_endian(value);

        let pass = Pass {
            idx: self.idx,
            input_len,
            value,
            stage: self.stage,
        };
        self.idx += 1;
        Some(pass)
    }
}

impl<'a> std::iter::FusedIterator for Passes<'a> {}
