/// Outcome of one `PhysicsEngine::step`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Ground or wall bounce happened this frame (driver may play a sound, etc.)
    pub bounced: bool,
}
