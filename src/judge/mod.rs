pub mod judge_choice;
pub mod judge_sequence;
pub mod judge_subset;

pub use judge_choice::judge_choice;
pub use judge_sequence::judge_sequence;
pub use judge_subset::judge_subset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_bool(ok: bool) -> Self {
        if ok { Verdict::Pass } else { Verdict::Fail }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Texto de feedback que se muestra al revelar el veredicto.
pub fn format_verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "Correct! 💖",
        Verdict::Fail => "Failed! 💔",
    }
}
