use super::*;

/// Where a reduction stands after a given pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Seeded,
    Folding,
    Converged,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Stage::Seeded => "seeded".normal(),
            Stage::Folding => "folding".bright_blue(),
            Stage::Converged => "converged".bright_green(),
        };
        write!(f, "{}", label)
    }
}

/// One fold pass of a reduction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pass {
    pub idx: usize,
    pub input_len: usize,
    pub value: u64,
    pub stage: Stage,
}

impl std::fmt::Display for Pass {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fm,
            "pass {}: {} bytes -> {} [{}]",
            self.idx,
            self.input_len,
            format!("{:x}", self.value).bright_yellow(),
            self.stage
        )
    }
}
