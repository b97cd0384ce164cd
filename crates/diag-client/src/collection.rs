/// A server-side resource collection that new members can be created in.
pub trait Collection {
    /// What the caller sends to describe the new member.
    type Spec;
    /// Handle returned for the created member.
    type Item;

    fn create(&self, spec: Self::Spec) -> diag_core::DiagResult<Self::Item>;
}
