/// One status line of the simulated loading sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingStage(&'static str);

impl LoadingStage {
    #[must_use]
    pub const fn text(self) -> &'static str {
        self.0
    }
}

/// Stages shown in order while results are "loading".
pub const LOADING_STAGES: [LoadingStage; 5] = [
    LoadingStage("Scanning Reddit communities..."),
    LoadingStage("Deep inside Reddit..."),
    LoadingStage("Analyzing pain points..."),
    LoadingStage("Formulating AI solutions..."),
    LoadingStage("Preparing your opportunities..."),
];
