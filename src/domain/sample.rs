/// A single observation of the relation being learned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The input value fed to the model
    pub x: f32,

    /// The target the model should produce for `x`
    pub y: f32,
}

impl Sample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
